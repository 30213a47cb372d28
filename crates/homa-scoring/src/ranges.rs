//! Reference ranges printed beside each measurement on the test report.
//!
//! Waist and HDL limits differ by sex. Patients recorded as `other` are
//! graded against the female limits.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use homa_core::models::measurements::NumericField;
use homa_core::models::patient::Sex;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ReferenceRange {
    const fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    const fn at_most(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    const fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Grade a reading. Zero counts as not provided.
    pub fn status(&self, value: Option<f64>) -> RangeStatus {
        let Some(value) = value.filter(|v| v.is_finite() && *v != 0.0) else {
            return RangeStatus::NotProvided;
        };
        if self.min.is_some_and(|min| value < min) {
            RangeStatus::Low
        } else if self.max.is_some_and(|max| value > max) {
            RangeStatus::High
        } else {
            RangeStatus::Normal
        }
    }
}

impl fmt::Display for ReferenceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(f, "{min} to {max}"),
            (None, Some(max)) => write!(f, "< {max}"),
            (Some(min), None) => write!(f, "> {min}"),
            (None, None) => f.write_str("any"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RangeStatus {
    NotProvided,
    Low,
    Normal,
    High,
}

impl RangeStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::NotProvided => "Not provided",
            Self::Low => "Low",
            Self::Normal => "Normal",
            Self::High => "High",
        }
    }
}

/// Reference range for a measured field, if the report grades it.
pub fn reference_range(field: NumericField, sex: Sex) -> Option<ReferenceRange> {
    let female_limits = !matches!(sex, Sex::Male);
    let range = match field {
        NumericField::WaistCm if female_limits => ReferenceRange::at_most(80.0),
        NumericField::WaistCm => ReferenceRange::at_most(94.0),
        NumericField::HdlCholesterol if female_limits => ReferenceRange::at_least(50.0),
        NumericField::HdlCholesterol => ReferenceRange::at_least(40.0),
        NumericField::SystolicBp => ReferenceRange::between(90.0, 120.0),
        NumericField::DiastolicBp => ReferenceRange::between(60.0, 80.0),
        NumericField::FastingGlucose => ReferenceRange::between(70.0, 99.0),
        NumericField::FastingInsulin => ReferenceRange::between(2.0, 20.0),
        NumericField::TotalCholesterol => ReferenceRange::at_most(200.0),
        NumericField::Triglycerides => ReferenceRange::at_most(150.0),
        _ => return None,
    };
    Some(range)
}

/// Reference range for BMI, which is derived rather than measured.
pub const BMI_RANGE: ReferenceRange = ReferenceRange::between(18.5, 24.9);
