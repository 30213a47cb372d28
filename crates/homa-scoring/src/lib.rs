//! homa-scoring
//!
//! Cardiometabolic risk scoring. Pure computation with no storage or I/O.
//! Maps a [`MeasurementSet`] to derived indices, a weighted point total,
//! and a speedometer zone.

pub mod advice;
pub mod indices;
pub mod interpret;
pub mod ranges;
pub mod rules;
pub mod zones;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use homa_core::models::measurements::MeasurementSet;
use homa_core::models::scores::ScoreResult;

use indices::DerivedIndices;

/// One rule that added points to a total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreContribution {
    pub rule_id: String,
    pub label: String,
    pub points: u32,
}

/// Compute every derived field for a measurement set.
///
/// Never fails: anything that cannot be computed is left absent and adds
/// no points.
pub fn compute(measurements: &MeasurementSet) -> ScoreResult {
    let indices = DerivedIndices::from_measurements(measurements);
    let total_score = breakdown_with(measurements, &indices)
        .iter()
        .map(|c| c.points)
        .sum();
    let (speedometer_zone, risk_category) = zones::classify(total_score);

    ScoreResult {
        bmi: indices.bmi,
        homa_ir: indices.homa_ir,
        tyg_index: indices.tyg_index,
        waist_score: indices.waist_score,
        total_score,
        speedometer_zone,
        risk_category,
    }
}

/// Every rule that contributed to the total, in table order.
///
/// The points always sum to `compute(measurements).total_score`.
pub fn breakdown(measurements: &MeasurementSet) -> Vec<ScoreContribution> {
    let indices = DerivedIndices::from_measurements(measurements);
    breakdown_with(measurements, &indices)
}

fn breakdown_with(measurements: &MeasurementSet, indices: &DerivedIndices) -> Vec<ScoreContribution> {
    let mut contributions = Vec::new();

    if indices.waist_score > 0 {
        contributions.push(ScoreContribution {
            rule_id: "waist".to_string(),
            label: format!("Waist circumference above {} cm", rules::WAIST_THRESHOLD_CM),
            points: indices.waist_score,
        });
    }

    for rule in rules::history_rules() {
        if rule.flag.is_set(measurements) {
            contributions.push(ScoreContribution {
                rule_id: rule.flag.name().to_string(),
                label: rule.flag.label().to_string(),
                points: rule.points,
            });
        }
    }

    for rule in rules::index_rules() {
        if let Some(value) = rule.index.value(indices)
            && value > rule.threshold
        {
            contributions.push(ScoreContribution {
                rule_id: rule.index.id().to_string(),
                label: format!("{} {value} above {}", rule.index.name(), rule.threshold),
                points: rule.points,
            });
        }
    }

    for rule in rules::lab_rules() {
        if let Some(value) = rule.reading(measurements)
            && rule.bounds.is_abnormal(value)
        {
            contributions.push(ScoreContribution {
                rule_id: rule.field.name().to_string(),
                label: format!("{} {value} ({})", rule.field.label(), rule.bounds),
                points: rule.points,
            });
        }
    }

    contributions
}
