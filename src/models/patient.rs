//! Patient record model
//!
//! This module contains the inbound clinical record consumed by the
//! prediction pipeline. The record uses descriptive field names on the
//! wire; the model itself is trained on the short clinical codes exposed
//! by [`PatientRecord::feature_values`].

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::types::Sex;

/// Laboratory values and history flags for one patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
    /// Urine specific gravity
    pub specific_gravity: f64,
    /// Urine albumin level
    pub albumin: f64,
    /// Random blood glucose (mg/dL)
    pub blood_glucose_random: f64,
    /// Serum creatinine (mg/dL)
    pub serum_creatinine: f64,
    /// Serum sodium (mEq/L)
    pub sodium: f64,
    /// Hemoglobin (g/dL)
    pub hemoglobin: f64,
    /// Packed cell volume (%)
    pub packed_cell_volume: f64,
    /// Red blood cell count (millions/cmm)
    pub red_blood_cell_count: f64,
    /// Hypertension flag (1 = yes, 0 = no)
    pub hypertension: u8,
    /// Diabetes mellitus flag (1 = yes, 0 = no)
    pub diabetes_mellitus: u8,
}

impl PatientRecord {
    /// Map the record onto the short clinical feature codes the trained
    /// model selects from.
    ///
    /// Sex is encoded numerically (male = 1.0, female = 0.0). The map may
    /// contain more entries than the model consumes; the feature schema
    /// projects the extras away before inference.
    #[must_use]
    pub fn feature_values(&self) -> FxHashMap<String, f64> {
        let mut values = FxHashMap::default();
        values.insert("age".to_string(), f64::from(self.age));
        values.insert("sex".to_string(), self.sex.as_feature_value());
        values.insert("sg".to_string(), self.specific_gravity);
        values.insert("al".to_string(), self.albumin);
        values.insert("bgr".to_string(), self.blood_glucose_random);
        values.insert("sc".to_string(), self.serum_creatinine);
        values.insert("sod".to_string(), self.sodium);
        values.insert("hemo".to_string(), self.hemoglobin);
        values.insert("pcv".to_string(), self.packed_cell_volume);
        values.insert("rc".to_string(), self.red_blood_cell_count);
        values.insert("htn".to_string(), f64::from(self.hypertension));
        values.insert("dm".to_string(), f64::from(self.diabetes_mellitus));
        values
    }
}
