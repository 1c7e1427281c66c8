//! Domain models for the CKD scorer
//!
//! This module contains the inbound patient record, the prediction result
//! types and the common enums shared between them.

pub mod patient;
pub mod prediction;
pub mod types;

pub use patient::PatientRecord;
pub use prediction::{CkdStage, Diagnosis, PredictionResponse, PredictionResult};
pub use types::{ClassLabel, Sex};
