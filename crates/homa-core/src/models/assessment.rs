use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::measurements::MeasurementSet;
use super::patient::Sex;
use super::scores::ScoreResult;

/// One recorded health assessment. Assessments are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub measurements: MeasurementSet,
    pub scores: ScoreResult,
    pub lab_notes: Option<String>,
    pub recorded_by: Option<Uuid>,
    pub created_at: jiff::Timestamp,
}

/// Submission body for a new assessment.
///
/// Measurements are flattened so a form can post its fields directly. Any
/// derived values a client sends along (`bmi`, `total_score`, ...) are not
/// part of this type and are dropped; the server recomputes them.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewAssessment {
    pub patient_id: Uuid,
    #[serde(flatten)]
    pub measurements: MeasurementSet,
    #[serde(default)]
    pub lab_notes: Option<String>,
}

/// An assessment joined with the patient fields shown in listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSummary {
    #[serde(flatten)]
    pub assessment: Assessment,
    pub patient_name: String,
    pub patient_age: u8,
    pub patient_sex: Sex,
}
