use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Colour band shown on the risk speedometer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SpeedometerZone {
    Green,
    BlueRed,
    OrangeRed,
    Red,
}

impl SpeedometerZone {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::BlueRed => "blue_red",
            Self::OrangeRed => "orange_red",
            Self::Red => "red",
        }
    }

    /// Upper-case display form, e.g. `BLUE-RED`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::BlueRed => "BLUE-RED",
            Self::OrangeRed => "ORANGE-RED",
            Self::Red => "RED",
        }
    }
}

impl fmt::Display for SpeedometerZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpeedometerZone {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green" => Ok(Self::Green),
            "blue_red" => Ok(Self::BlueRed),
            "orange_red" => Ok(Self::OrangeRed),
            "red" => Ok(Self::Red),
            other => Err(CoreError::InvalidField(format!(
                "unknown speedometer zone: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very_high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
            Self::VeryHigh => "VERY HIGH",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            "very_high" => Ok(Self::VeryHigh),
            other => Err(CoreError::InvalidField(format!(
                "unknown risk category: {other}"
            ))),
        }
    }
}

/// Values derived from a [`MeasurementSet`](super::measurements::MeasurementSet).
///
/// Indices are `None` when their inputs were missing or unusable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub bmi: Option<f64>,
    pub homa_ir: Option<f64>,
    pub tyg_index: Option<f64>,
    pub waist_score: u32,
    pub total_score: u32,
    pub speedometer_zone: SpeedometerZone,
    pub risk_category: RiskCategory,
}
