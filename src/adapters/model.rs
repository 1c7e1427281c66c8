//! Model adapter wrapping the trained classifier artifact

use std::sync::Arc;

use log::debug;

use super::Classifier;
use crate::artifacts::TreeEnsemble;
use crate::error::{Result, ScorerError};
use crate::features::{FeatureSchema, FeatureVector};
use crate::models::ClassLabel;

/// Output of one classification call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Predicted class
    pub label: ClassLabel,
    /// Model-estimated probability of the positive class, unrounded
    pub probability: f64,
}

/// Adapter owning the immutable trained model and its feature schema.
///
/// Both are loaded once at startup and shared read-only for the process
/// lifetime; the adapter is safe for unsynchronized concurrent use.
#[derive(Debug, Clone)]
pub struct ModelAdapter {
    ensemble: Arc<TreeEnsemble>,
    schema: Arc<FeatureSchema>,
}

impl ModelAdapter {
    /// Pair a validated ensemble with its feature schema.
    ///
    /// Fails with a model-load error if the schema length disagrees with
    /// the number of features the model was trained on; a mismatched pair
    /// is a startup invariant violation, not a per-request error.
    pub fn new(ensemble: Arc<TreeEnsemble>, schema: Arc<FeatureSchema>) -> Result<Self> {
        if ensemble.n_features != schema.len() {
            return Err(ScorerError::inference(format!(
                "model expects {} features but the schema lists {}",
                ensemble.n_features,
                schema.len()
            )));
        }

        Ok(Self { ensemble, schema })
    }

    /// The feature schema the model was trained on
    #[must_use]
    pub fn schema(&self) -> &Arc<FeatureSchema> {
        &self.schema
    }

    /// The underlying ensemble, for pairing an explainer at load time
    #[must_use]
    pub fn ensemble(&self) -> &Arc<TreeEnsemble> {
        &self.ensemble
    }
}

impl Classifier for ModelAdapter {
    fn classify(&self, features: &FeatureVector) -> Result<Classification> {
        let probability = self.ensemble.predict_proba(features.values())?;
        let label = ClassLabel::from(probability >= 0.5);

        debug!(
            "Classified input as {:?} with probability {probability:.6}",
            label
        );

        Ok(Classification { label, probability })
    }
}
