//! Error handling for the CKD scorer.
//!
//! The taxonomy separates recoverable client-input failures (`Validation`)
//! from fatal startup failures (`ModelLoad`) and internal invariant
//! violations (`Inference`).

use std::path::{Path, PathBuf};

/// Specialized error type for the CKD scorer
#[derive(Debug, thiserror::Error)]
pub enum ScorerError {
    /// Input is missing required fields or contains values the feature
    /// projection or clinical formulas cannot consume
    #[error("Validation error: {0}")]
    Validation(String),

    /// A model artifact is missing or corrupt; fatal at startup
    #[error("Model load error for {path}: {message}")]
    ModelLoad {
        /// Path of the offending artifact
        path: PathBuf,
        /// Description of the failure
        message: String,
    },

    /// Mismatch between supplied features and model expectations after
    /// validation should have prevented it
    #[error("Inference error: {0}")]
    Inference(String),
}

impl ScorerError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a model load error tied to an artifact path
    pub fn model_load(path: &Path, message: impl Into<String>) -> Self {
        Self::ModelLoad {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Create an inference error
    pub fn inference(message: impl Into<String>) -> Self {
        Self::Inference(message.into())
    }

    /// Whether the process should refuse to serve predictions after this
    /// error (true only for artifact load failures)
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::ModelLoad { .. })
    }
}

/// Result type for CKD scorer operations
pub type Result<T> = std::result::Result<T, ScorerError>;
