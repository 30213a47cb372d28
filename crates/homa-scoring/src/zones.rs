use serde::{Deserialize, Serialize};
use ts_rs::TS;

use homa_core::models::scores::{RiskCategory, SpeedometerZone};

/// A half-open score interval `[min_score, next band's min_score)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ZoneBand {
    pub min_score: u32,
    pub zone: SpeedometerZone,
    pub category: RiskCategory,
}

const BANDS: [ZoneBand; 4] = [
    ZoneBand {
        min_score: 0,
        zone: SpeedometerZone::Green,
        category: RiskCategory::Low,
    },
    ZoneBand {
        min_score: 40,
        zone: SpeedometerZone::BlueRed,
        category: RiskCategory::Moderate,
    },
    ZoneBand {
        min_score: 60,
        zone: SpeedometerZone::OrangeRed,
        category: RiskCategory::High,
    },
    ZoneBand {
        min_score: 80,
        zone: SpeedometerZone::Red,
        category: RiskCategory::VeryHigh,
    },
];

/// Bands in ascending order of `min_score`.
pub fn bands() -> &'static [ZoneBand] {
    &BANDS
}

pub fn classify(total_score: u32) -> (SpeedometerZone, RiskCategory) {
    let band = BANDS
        .iter()
        .rev()
        .find(|b| total_score >= b.min_score)
        .unwrap_or(&BANDS[0]);
    (band.zone, band.category)
}
