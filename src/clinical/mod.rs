//! Clinical formulas for kidney-function assessment
//!
//! Pure functions implementing the CKD-EPI creatinine equation and the
//! eGFR/albumin staging ladder. These run only when the classifier outputs
//! the positive class.

use crate::error::{Result, ScorerError};
use crate::models::{CkdStage, Sex};

/// Sex-specific CKD-EPI constants: reference creatinine, low-range exponent,
/// high-range exponent, scaling factor.
const MALE: (f64, f64, f64, f64) = (0.9, -0.411, -1.209, 141.0);
const FEMALE: (f64, f64, f64, f64) = (0.7, -0.329, -1.209, 144.0);

/// Estimate the glomerular filtration rate using the CKD-EPI two-slope
/// creatinine equation, rounded to 2 decimal places.
///
/// Fails with a validation error for non-positive age or creatinine.
pub fn estimate_gfr(age: u32, serum_creatinine: f64, sex: Sex) -> Result<f64> {
    if age == 0 {
        return Err(ScorerError::validation("age must be positive"));
    }
    if serum_creatinine <= 0.0 || !serum_creatinine.is_finite() {
        return Err(ScorerError::validation(
            "serum creatinine must be a positive number",
        ));
    }

    let (reference, low_exp, high_exp, factor) = match sex {
        Sex::Male => MALE,
        Sex::Female => FEMALE,
    };

    let ratio = serum_creatinine / reference;
    let egfr = factor
        * ratio.min(1.0).powf(low_exp)
        * ratio.max(1.0).powf(high_exp)
        * 0.993_f64.powi(i32::try_from(age).unwrap_or(i32::MAX));

    Ok(round2(egfr))
}

/// Map an eGFR and albumin level to a discrete CKD stage.
///
/// The ladder is evaluated top-down, first match wins. When albumin is not
/// positive and eGFR is 60 or above, no rung matches and the ladder falls
/// through to Stage 5; the source system behaves this way and downstream
/// consumers depend on it, so it is kept as-is.
#[must_use]
pub fn classify_stage(egfr: f64, albumin: f64) -> CkdStage {
    if egfr >= 90.0 && albumin > 0.0 {
        CkdStage::Stage1
    } else if (60.0..90.0).contains(&egfr) && albumin > 0.0 {
        CkdStage::Stage2
    } else if (45.0..60.0).contains(&egfr) {
        CkdStage::Stage3a
    } else if (30.0..45.0).contains(&egfr) {
        CkdStage::Stage3b
    } else if (15.0..30.0).contains(&egfr) {
        CkdStage::Stage4
    } else {
        CkdStage::Stage5
    }
}

/// Round to 2 decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
