//! Reference bands for the derived indices, as printed on the report.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use homa_core::models::scores::ScoreResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BmiBand {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiBand {
    pub fn of(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InsulinSensitivity {
    Optimal,
    Normal,
    EarlyResistance,
    SignificantResistance,
}

impl InsulinSensitivity {
    pub fn of(homa_ir: f64) -> Self {
        if homa_ir < 1.0 {
            Self::Optimal
        } else if homa_ir < 1.9 {
            Self::Normal
        } else if homa_ir < 2.9 {
            Self::EarlyResistance
        } else {
            Self::SignificantResistance
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Optimal => "Optimal insulin sensitivity",
            Self::Normal => "Normal insulin sensitivity",
            Self::EarlyResistance => "Early insulin resistance",
            Self::SignificantResistance => "Significant insulin resistance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TygBand {
    Low,
    Moderate,
    High,
}

impl TygBand {
    pub fn of(tyg_index: f64) -> Self {
        if tyg_index < 8.5 {
            Self::Low
        } else if tyg_index < 9.0 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low cardiometabolic risk",
            Self::Moderate => "Moderate cardiometabolic risk",
            Self::High => "High cardiometabolic risk",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub bmi: Option<BmiBand>,
    pub homa_ir: Option<InsulinSensitivity>,
    pub tyg_index: Option<TygBand>,
}

pub fn interpret(result: &ScoreResult) -> Interpretation {
    Interpretation {
        bmi: result.bmi.map(BmiBand::of),
        homa_ir: result.homa_ir.map(InsulinSensitivity::of),
        tyg_index: result.tyg_index.map(TygBand::of),
    }
}
