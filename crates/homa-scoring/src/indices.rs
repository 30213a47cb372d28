//! Derived lab indices.
//!
//! Each index is computed only from strictly positive, finite inputs and is
//! rounded to two decimal places. Anything else yields `None`.

use homa_core::models::measurements::MeasurementSet;

use crate::rules::{WAIST_POINTS, WAIST_THRESHOLD_CM};

/// HOMA-IR constant for glucose in mg/dL and insulin in µIU/mL.
pub const HOMA_IR_DIVISOR: f64 = 405.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DerivedIndices {
    pub bmi: Option<f64>,
    pub homa_ir: Option<f64>,
    pub tyg_index: Option<f64>,
    pub waist_score: u32,
}

impl DerivedIndices {
    pub fn from_measurements(m: &MeasurementSet) -> Self {
        Self {
            bmi: bmi(m.height_cm, m.weight_kg),
            homa_ir: homa_ir(m.fasting_glucose, m.fasting_insulin),
            tyg_index: tyg_index(m.triglycerides, m.fasting_glucose),
            waist_score: waist_score(m.waist_cm),
        }
    }
}

/// `weight / (height_m)^2`.
pub fn bmi(height_cm: Option<f64>, weight_kg: Option<f64>) -> Option<f64> {
    let height_m = positive(height_cm)? / 100.0;
    let weight = positive(weight_kg)?;
    finite_rounded(weight / (height_m * height_m))
}

/// `glucose * insulin / 405`.
pub fn homa_ir(fasting_glucose: Option<f64>, fasting_insulin: Option<f64>) -> Option<f64> {
    let glucose = positive(fasting_glucose)?;
    let insulin = positive(fasting_insulin)?;
    finite_rounded(glucose * insulin / HOMA_IR_DIVISOR)
}

/// `ln(triglycerides * glucose / 2)`.
pub fn tyg_index(triglycerides: Option<f64>, fasting_glucose: Option<f64>) -> Option<f64> {
    let tg = positive(triglycerides)?;
    let glucose = positive(fasting_glucose)?;
    finite_rounded((tg * glucose / 2.0).ln())
}

/// 20 points strictly above 85 cm, otherwise 0. Absent waist scores 0.
pub fn waist_score(waist_cm: Option<f64>) -> u32 {
    match waist_cm {
        Some(w) if w > WAIST_THRESHOLD_CM => WAIST_POINTS,
        _ => 0,
    }
}

/// Round half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

fn finite_rounded(value: f64) -> Option<f64> {
    value.is_finite().then(|| round2(value))
}
