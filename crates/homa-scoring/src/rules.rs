//! The fixed scoring table.
//!
//! Thresholds and weights are reproduced exactly from the clinic's
//! paper form; they are not configuration.

use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use homa_core::models::measurements::{HistoryFlag, HistoryKind, MeasurementSet, NumericField};

use crate::indices::DerivedIndices;
use crate::zones::{self, ZoneBand};

pub const WAIST_THRESHOLD_CM: f64 = 85.0;
pub const WAIST_POINTS: u32 = 20;
pub const PERSONAL_HISTORY_POINTS: u32 = 10;
pub const FAMILY_HISTORY_POINTS: u32 = 5;
pub const INDEX_POINTS: u32 = 10;
pub const LAB_POINTS: u32 = 5;

/// When a lab reading counts as abnormal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Bounds {
    /// Abnormal when strictly greater than `limit`.
    Above { limit: f64 },
    /// Abnormal when strictly less than `limit`.
    Below { limit: f64 },
    /// Abnormal outside the closed range `[min, max]`.
    Outside { min: f64, max: f64 },
}

impl Bounds {
    pub fn is_abnormal(&self, value: f64) -> bool {
        match *self {
            Bounds::Above { limit } => value > limit,
            Bounds::Below { limit } => value < limit,
            Bounds::Outside { min, max } => value < min || value > max,
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bounds::Above { limit } => write!(f, "> {limit}"),
            Bounds::Below { limit } => write!(f, "< {limit}"),
            Bounds::Outside { min, max } => write!(f, "outside {min} to {max}"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabRule {
    pub field: NumericField,
    pub bounds: Bounds,
    pub points: u32,
}

impl LabRule {
    /// The reading this rule inspects. Zero is how the intake form records
    /// an unfilled box, so it is treated as not recorded.
    pub fn reading(&self, m: &MeasurementSet) -> Option<f64> {
        self.field
            .get(m)
            .filter(|v| v.is_finite() && *v != 0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryRule {
    pub flag: HistoryFlag,
    pub kind: HistoryKind,
    pub points: u32,
}

/// A derived index that can itself earn points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DerivedIndex {
    HomaIr,
    TygIndex,
}

impl DerivedIndex {
    pub fn id(self) -> &'static str {
        match self {
            Self::HomaIr => "homa_ir",
            Self::TygIndex => "tyg_index",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::HomaIr => "HOMA-IR",
            Self::TygIndex => "TyG index",
        }
    }

    pub fn value(self, indices: &DerivedIndices) -> Option<f64> {
        match self {
            Self::HomaIr => indices.homa_ir,
            Self::TygIndex => indices.tyg_index,
        }
    }
}

/// Compared against the rounded index, strictly greater-than.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IndexRule {
    pub index: DerivedIndex,
    pub threshold: f64,
    pub points: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WaistRule {
    pub threshold_cm: f64,
    pub points: u32,
}

/// The complete table, for clients that render it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RuleCatalogue {
    pub waist: WaistRule,
    pub history: Vec<HistoryRule>,
    pub indices: Vec<IndexRule>,
    pub labs: Vec<LabRule>,
    pub zones: Vec<ZoneBand>,
}

pub fn history_rules() -> &'static [HistoryRule] {
    static RULES: LazyLock<Vec<HistoryRule>> = LazyLock::new(|| {
        HistoryFlag::ALL
            .iter()
            .map(|&flag| {
                let kind = flag.kind();
                let points = match kind {
                    HistoryKind::Personal => PERSONAL_HISTORY_POINTS,
                    HistoryKind::Family => FAMILY_HISTORY_POINTS,
                };
                HistoryRule { flag, kind, points }
            })
            .collect()
    });
    &RULES
}

pub fn index_rules() -> &'static [IndexRule] {
    static RULES: LazyLock<Vec<IndexRule>> = LazyLock::new(|| {
        vec![
            IndexRule {
                index: DerivedIndex::HomaIr,
                threshold: 2.5,
                points: INDEX_POINTS,
            },
            IndexRule {
                index: DerivedIndex::TygIndex,
                threshold: 8.5,
                points: INDEX_POINTS,
            },
        ]
    });
    &RULES
}

pub fn lab_rules() -> &'static [LabRule] {
    static RULES: LazyLock<Vec<LabRule>> = LazyLock::new(|| {
        use NumericField::*;

        vec![
            // CBC
            lab(Hemoglobin, Bounds::Outside { min: 12.0, max: 18.0 }),
            lab(WbcCount, Bounds::Outside { min: 4.0, max: 11.0 }),
            lab(PlateletCount, Bounds::Outside { min: 150.0, max: 400.0 }),
            // Lipids
            lab(TotalCholesterol, Bounds::Above { limit: 200.0 }),
            lab(LdlCholesterol, Bounds::Above { limit: 100.0 }),
            lab(HdlCholesterol, Bounds::Below { limit: 40.0 }),
            lab(Triglycerides, Bounds::Above { limit: 150.0 }),
            // LFT
            lab(SgptAlt, Bounds::Above { limit: 40.0 }),
            lab(SgotAst, Bounds::Above { limit: 40.0 }),
            // KFT
            lab(Creatinine, Bounds::Outside { min: 0.6, max: 1.2 }),
            lab(UricAcid, Bounds::Above { limit: 7.0 }),
            // TFT
            lab(Tsh, Bounds::Outside { min: 0.4, max: 4.0 }),
        ]
    });
    &RULES
}

pub fn catalogue() -> RuleCatalogue {
    RuleCatalogue {
        waist: WaistRule {
            threshold_cm: WAIST_THRESHOLD_CM,
            points: WAIST_POINTS,
        },
        history: history_rules().to_vec(),
        indices: index_rules().to_vec(),
        labs: lab_rules().to_vec(),
        zones: zones::bands().to_vec(),
    }
}

fn lab(field: NumericField, bounds: Bounds) -> LabRule {
    LabRule {
        field,
        bounds,
        points: LAB_POINTS,
    }
}
