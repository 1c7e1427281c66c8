//! Prediction orchestrator
//!
//! Composes the feature projection, the model adapter, the explainer
//! adapter and the clinical formulas into one synchronous prediction call.
//! The scorer holds only shared read-only state, so a single instance can
//! serve concurrent requests without locking.

use std::sync::Arc;

use itertools::Itertools;
use log::debug;

use crate::adapters::{
    AttributionRecord, Attributor, Classifier, ModelAdapter, TreeExplainer,
};
use crate::artifacts;
use crate::clinical;
use crate::config::ScorerConfig;
use crate::error::{Result, ScorerError};
use crate::features::FeatureSchema;
use crate::models::{Diagnosis, PatientRecord, PredictionResult};

/// The prediction pipeline: projection, inference, attribution and staging
#[derive(Debug, Clone)]
pub struct CkdScorer<M: Classifier = ModelAdapter, E: Attributor = TreeExplainer> {
    schema: Arc<FeatureSchema>,
    model: M,
    explainer: E,
    top_factor_limit: usize,
}

impl CkdScorer {
    /// Load both startup artifacts and assemble the pipeline.
    ///
    /// The classifier and the attribution engine are bound to the same
    /// model handle here; a feature-count mismatch between the artifacts
    /// fails the load outright.
    pub fn from_artifacts(config: &ScorerConfig) -> Result<Self> {
        let schema = Arc::new(artifacts::load_feature_schema(&config.features_path)?);
        let ensemble = Arc::new(artifacts::load_ensemble(&config.model_path)?);

        if ensemble.n_features != schema.len() {
            return Err(ScorerError::model_load(
                &config.model_path,
                format!(
                    "model expects {} features but the feature list has {}",
                    ensemble.n_features,
                    schema.len()
                ),
            ));
        }

        let model = ModelAdapter::new(Arc::clone(&ensemble), Arc::clone(&schema))?;
        let explainer = TreeExplainer::new(ensemble, Arc::clone(&schema))?;

        Ok(Self::new(schema, model, explainer).with_top_factor_limit(config.top_factor_limit))
    }
}

impl<M: Classifier, E: Attributor> CkdScorer<M, E> {
    /// Assemble a scorer from already-constructed components
    #[must_use]
    pub fn new(schema: Arc<FeatureSchema>, model: M, explainer: E) -> Self {
        Self {
            schema,
            model,
            explainer,
            top_factor_limit: 5,
        }
    }

    /// Override the number of reported contributing factors
    #[must_use]
    pub fn with_top_factor_limit(mut self, limit: usize) -> Self {
        self.top_factor_limit = limit;
        self
    }

    /// The feature schema predictions are projected onto
    #[must_use]
    pub fn schema(&self) -> &Arc<FeatureSchema> {
        &self.schema
    }

    /// Run one prediction.
    ///
    /// Either returns a fully assembled result or a typed error; nothing is
    /// retried and no partial result is ever produced. The clinical
    /// formulas run only when the classifier outputs the positive class.
    pub fn predict(&self, patient: &PatientRecord) -> Result<PredictionResult> {
        let features = self.schema.project(&patient.feature_values())?;

        let classification = self.model.classify(&features)?;
        let attributions = self.explainer.attribute(&features)?;
        let top_factors = rank_top_factors(&attributions, self.top_factor_limit);

        debug!(
            "Prediction {:?} (p = {:.3}), top factor: {:?}",
            classification.label,
            classification.probability,
            top_factors.first()
        );

        let diagnosis = if classification.label.is_positive() {
            let egfr = clinical::estimate_gfr(patient.age, patient.serum_creatinine, patient.sex)?;
            let stage = clinical::classify_stage(egfr, patient.albumin);
            Diagnosis::Positive { egfr, stage }
        } else {
            Diagnosis::Negative
        };

        Ok(PredictionResult {
            diagnosis,
            probability: round3(classification.probability),
            top_factors,
        })
    }
}

/// Rank attributions by descending absolute contribution (stable, so ties
/// keep schema order) and format the strongest ones for display.
///
/// A zero contribution reads as "reduced": the polarity split is strictly
/// positive versus everything else, matching the source system.
#[must_use]
pub fn rank_top_factors(record: &AttributionRecord, limit: usize) -> Vec<String> {
    record
        .entries
        .iter()
        .sorted_by(|a, b| b.contribution.abs().total_cmp(&a.contribution.abs()))
        .take(limit)
        .map(|entry| {
            let effect = if entry.contribution > 0.0 {
                "increased"
            } else {
                "reduced"
            };
            format!("{} {effect} CKD risk", entry.feature)
        })
        .collect()
}

/// Round to 3 decimal places
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
