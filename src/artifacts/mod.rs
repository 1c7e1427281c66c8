//! Artifact store access
//!
//! The scorer depends on two versioned artifacts produced by an external
//! training pipeline: the trained classifier and the ordered feature-name
//! list. Both are loaded once at process startup; any failure here is fatal
//! and the process must not serve predictions.

use std::fs;
use std::path::Path;

use log::info;

use crate::error::{Result, ScorerError};
use crate::features::FeatureSchema;

pub mod ensemble;

pub use ensemble::{DecisionTree, TreeEnsemble, TreeNode};

/// Load and validate the trained classifier artifact
pub fn load_ensemble(path: &Path) -> Result<TreeEnsemble> {
    let contents = read_artifact(path)?;

    let ensemble: TreeEnsemble = serde_json::from_str(&contents)
        .map_err(|e| ScorerError::model_load(path, format!("malformed model artifact: {e}")))?;

    ensemble
        .validate()
        .map_err(|message| ScorerError::model_load(path, message))?;

    info!(
        "Loaded classifier {} ({} trees, {} features)",
        ensemble.version,
        ensemble.trees.len(),
        ensemble.n_features
    );

    Ok(ensemble)
}

/// Load the ordered feature-name list artifact
pub fn load_feature_schema(path: &Path) -> Result<FeatureSchema> {
    let contents = read_artifact(path)?;

    let schema: FeatureSchema = serde_json::from_str(&contents)
        .map_err(|e| ScorerError::model_load(path, format!("malformed feature list: {e}")))?;

    info!(
        "Loaded feature schema {} ({} features)",
        schema.version(),
        schema.len()
    );

    Ok(schema)
}

fn read_artifact(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(ScorerError::model_load(path, "artifact not found"));
    }

    fs::read_to_string(path)
        .map_err(|e| ScorerError::model_load(path, format!("failed to read artifact: {e}")))
}
