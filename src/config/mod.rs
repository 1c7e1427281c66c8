//! Configuration for the CKD scorer.

use std::path::PathBuf;

/// Configuration for loading and running the scorer
#[derive(Debug, Clone)]
pub struct ScorerConfig {
    /// Path to the trained classifier artifact
    pub model_path: PathBuf,
    /// Path to the ordered feature-name list artifact
    pub features_path: PathBuf,
    /// Maximum number of contributing factors reported per prediction
    pub top_factor_limit: usize,
}

impl ScorerConfig {
    /// Create a configuration pointing at explicit artifact paths
    #[must_use]
    pub fn new(model_path: impl Into<PathBuf>, features_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            features_path: features_path.into(),
            ..Self::default()
        }
    }
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("ml_models/ckd_model.json"),
            features_path: PathBuf::from("ml_models/selected_features.json"),
            top_factor_limit: 5,
        }
    }
}
