//! Prediction result models
//!
//! The diagnosis is a tagged variant rather than two nullable fields so the
//! "eGFR and stage are present if and only if the diagnosis is positive"
//! invariant is enforced by the type itself.

use serde::Serialize;

/// Discrete CKD stage derived from eGFR and albumin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CkdStage {
    /// Normal kidney function with other evidence of damage
    Stage1,
    /// Mildly reduced kidney function
    Stage2,
    /// Mild to moderately reduced kidney function
    Stage3a,
    /// Moderate to severely reduced kidney function
    Stage3b,
    /// Severely reduced kidney function
    Stage4,
    /// Kidney failure
    Stage5,
}

impl CkdStage {
    /// Clinical display name for the stage
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stage1 => "Stage 1",
            Self::Stage2 => "Stage 2",
            Self::Stage3a => "Stage 3a",
            Self::Stage3b => "Stage 3b",
            Self::Stage4 => "Stage 4",
            Self::Stage5 => "Stage 5",
        }
    }
}

impl std::fmt::Display for CkdStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the binary classification, with clinical assessment attached
/// only to positive diagnoses
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnosis {
    /// CKD predicted; carries the kidney-function estimate and stage
    Positive {
        /// Estimated glomerular filtration rate (mL/min/1.73m²)
        egfr: f64,
        /// CKD stage derived from eGFR and albumin
        stage: CkdStage,
    },
    /// No CKD predicted
    Negative,
}

impl Diagnosis {
    /// Whether this is a positive CKD diagnosis
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        matches!(self, Self::Positive { .. })
    }
}

/// Complete result of one prediction call
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    /// Binary diagnosis, with eGFR and stage when positive
    pub diagnosis: Diagnosis,
    /// Calibrated probability of the positive class, rounded to 3 decimals
    pub probability: f64,
    /// Human-readable top contributing factors, strongest first (at most 5)
    pub top_factors: Vec<String>,
}

/// Wire representation of a prediction, matching the response contract of
/// the external request-handling collaborator
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    /// "Yes" or "No"
    pub ckd_diagnosis: String,
    /// Probability of the positive class
    pub risk_probability: f64,
    /// Ranked factor descriptions
    pub top_factors: Vec<String>,
    /// eGFR, present only for positive diagnoses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub egfr: Option<f64>,
    /// CKD stage, present only for positive diagnoses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ckd_stage: Option<String>,
}

impl From<&PredictionResult> for PredictionResponse {
    fn from(result: &PredictionResult) -> Self {
        let (diagnosis, egfr, stage) = match &result.diagnosis {
            Diagnosis::Positive { egfr, stage } => ("Yes", Some(*egfr), Some(stage.to_string())),
            Diagnosis::Negative => ("No", None, None),
        };

        Self {
            ckd_diagnosis: diagnosis.to_string(),
            risk_probability: result.probability,
            top_factors: result.top_factors.clone(),
            egfr,
            ckd_stage: stage,
        }
    }
}
