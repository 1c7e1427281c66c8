//! Common domain type definitions
//!
//! This module contains common enum types used across domain models to
//! ensure consistency and facilitate code reuse.

use serde::{Deserialize, Serialize};

/// Biological sex of a patient, as used by the CKD-EPI formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
}

impl Sex {
    /// Numeric encoding used when the model consumes sex as a feature
    /// (male = 1.0, female = 0.0)
    #[must_use]
    pub const fn as_feature_value(self) -> f64 {
        match self {
            Self::Male => 1.0,
            Self::Female => 0.0,
        }
    }
}

impl From<&str> for Sex {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "1" => Self::Male,
            _ => Self::Female,
        }
    }
}

impl From<i32> for Sex {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Male,
            _ => Self::Female,
        }
    }
}

/// Output class of the binary classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassLabel {
    /// No chronic kidney disease predicted (class 0)
    Negative,
    /// Chronic kidney disease predicted (class 1)
    Positive,
}

impl ClassLabel {
    /// Whether this is the positive (CKD) class
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Positive)
    }
}

impl From<bool> for ClassLabel {
    fn from(positive: bool) -> Self {
        if positive { Self::Positive } else { Self::Negative }
    }
}
