//! Model and explainer adapters
//!
//! This module defines the two contracts the orchestrator composes —
//! classification and attribution — and the concrete adapters backed by the
//! boosted-tree artifact. Any implementation of the traits is substitutable
//! without changing the orchestrator.

use crate::error::Result;
use crate::features::FeatureVector;

pub mod explainer;
pub mod model;

pub use explainer::{AttributionRecord, FeatureAttribution, TreeExplainer};
pub use model::{Classification, ModelAdapter};

/// A trained binary classifier behind an opaque scoring contract
pub trait Classifier: Send + Sync {
    /// Classify one model-ready feature vector
    fn classify(&self, features: &FeatureVector) -> Result<Classification>;
}

/// A feature-attribution engine paired to a classifier at load time
pub trait Attributor: Send + Sync {
    /// Produce one signed contribution per feature for this input
    fn attribute(&self, features: &FeatureVector) -> Result<AttributionRecord>;
}
