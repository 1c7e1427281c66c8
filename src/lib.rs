//! A Rust library for chronic-kidney-disease risk scoring: boosted-tree
//! inference, decision-path attributions, and CKD-EPI kidney-function
//! staging behind a single synchronous prediction call.

pub mod adapters;
pub mod artifacts;
pub mod clinical;
pub mod config;
pub mod error;
pub mod features;
pub mod models;
pub mod scorer;

// Re-export the most common types for easier use
// Core types
pub use config::ScorerConfig;
pub use error::{Result, ScorerError};
pub use scorer::CkdScorer;

// Domain models
pub use models::{
    CkdStage, ClassLabel, Diagnosis, PatientRecord, PredictionResponse, PredictionResult, Sex,
};

// Adapter contracts and implementations
pub use adapters::{
    AttributionRecord, Attributor, Classification, Classifier, ModelAdapter, TreeExplainer,
};

// Feature handling
pub use features::{FeatureSchema, FeatureVector};

// Clinical formulas
pub use clinical::{classify_stage, estimate_gfr};
