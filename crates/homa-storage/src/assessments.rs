use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, OptionalExtension, Row};
use uuid::Uuid;

use homa_core::models::assessment::{Assessment, AssessmentSummary};
use homa_core::models::measurements::{HistoryFlag, MeasurementSet, NumericField};
use homa_core::models::scores::ScoreResult;

use crate::db::{self, Store};
use crate::error::StorageError;

const SCORE_COLUMNS: [&str; 7] = [
    "bmi",
    "homa_ir",
    "tyg_index",
    "waist_score",
    "total_score",
    "speedometer_zone",
    "risk_category",
];

/// Everything needed to record an assessment. The store assigns the id and
/// timestamp.
#[derive(Debug, Clone)]
pub struct AssessmentRecord {
    pub patient_id: Uuid,
    pub measurements: MeasurementSet,
    pub scores: ScoreResult,
    pub lab_notes: Option<String>,
    pub recorded_by: Option<Uuid>,
}

impl Store {
    pub fn insert_assessment(&self, record: AssessmentRecord) -> Result<Assessment, StorageError> {
        let assessment = Assessment {
            id: Uuid::new_v4(),
            patient_id: record.patient_id,
            measurements: record.measurements,
            scores: record.scores,
            lab_notes: record.lab_notes,
            recorded_by: record.recorded_by,
            created_at: db::now(),
        };

        let mut columns: Vec<&str> = vec!["id", "patient_id"];
        columns.extend(db::measurement_columns());
        columns.extend(SCORE_COLUMNS);
        columns.extend(["lab_notes", "recorded_by", "created_at"]);

        let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();
        let sql = format!(
            "INSERT INTO assessments ({}) VALUES ({})",
            columns.join(", "),
            placeholders.join(", "),
        );

        let values = assessment_values(&assessment);
        debug_assert_eq!(values.len(), columns.len());

        let result = self.conn()?.execute(&sql, params_from_iter(values));
        match result {
            Ok(_) => {}
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                return Err(StorageError::not_found("patient", assessment.patient_id));
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(
            assessment_id = %assessment.id,
            patient_id = %assessment.patient_id,
            total_score = assessment.scores.total_score,
            zone = %assessment.scores.speedometer_zone,
            "assessment recorded"
        );
        Ok(assessment)
    }

    pub fn get_assessment(&self, id: Uuid) -> Result<Assessment, StorageError> {
        self.conn()?
            .query_row(
                "SELECT * FROM assessments WHERE id = ?1",
                params![id.to_string()],
                assessment_from_row,
            )
            .optional()?
            .ok_or_else(|| StorageError::not_found("assessment", id))
    }

    /// Assessments joined with their patient, newest first. Pass a patient id
    /// to restrict the listing to that patient.
    pub fn list_assessments(
        &self,
        patient_id: Option<Uuid>,
    ) -> Result<Vec<AssessmentSummary>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT a.*, p.name AS patient_name, p.age AS patient_age, p.sex AS patient_sex
             FROM assessments a
             JOIN patients p ON a.patient_id = p.id
             WHERE ?1 IS NULL OR a.patient_id = ?1
             ORDER BY a.created_at DESC, a.rowid DESC",
        )?;
        let summaries = stmt
            .query_map(params![patient_id.map(|id| id.to_string())], |row| {
                Ok(AssessmentSummary {
                    assessment: assessment_from_row(row)?,
                    patient_name: row.get("patient_name")?,
                    patient_age: row.get("patient_age")?,
                    patient_sex: db::parsed_column(row, "patient_sex")?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(summaries)
    }
}

fn assessment_values(a: &Assessment) -> Vec<Value> {
    let mut values = vec![
        Value::Text(a.id.to_string()),
        Value::Text(a.patient_id.to_string()),
    ];
    values.extend(
        NumericField::ALL
            .iter()
            .map(|f| f.get(&a.measurements).map_or(Value::Null, Value::Real)),
    );
    values.extend(HistoryFlag::ALL.iter().map(|f| {
        f.get(&a.measurements)
            .map_or(Value::Null, |b| Value::Integer(i64::from(b)))
    }));

    let s = &a.scores;
    values.extend([
        s.bmi.map_or(Value::Null, Value::Real),
        s.homa_ir.map_or(Value::Null, Value::Real),
        s.tyg_index.map_or(Value::Null, Value::Real),
        Value::Integer(i64::from(s.waist_score)),
        Value::Integer(i64::from(s.total_score)),
        Value::Text(s.speedometer_zone.as_str().to_string()),
        Value::Text(s.risk_category.as_str().to_string()),
        a.lab_notes.clone().map_or(Value::Null, Value::Text),
        a.recorded_by.map_or(Value::Null, |id| Value::Text(id.to_string())),
        Value::Integer(a.created_at.as_microsecond()),
    ]);
    values
}

fn assessment_from_row(row: &Row<'_>) -> rusqlite::Result<Assessment> {
    let mut measurements = MeasurementSet::default();
    for field in NumericField::ALL {
        field.set(&mut measurements, row.get(field.name())?);
    }
    for flag in HistoryFlag::ALL {
        flag.set(&mut measurements, row.get(flag.name())?);
    }

    Ok(Assessment {
        id: db::parsed_column(row, "id")?,
        patient_id: db::parsed_column(row, "patient_id")?,
        measurements,
        scores: ScoreResult {
            bmi: row.get("bmi")?,
            homa_ir: row.get("homa_ir")?,
            tyg_index: row.get("tyg_index")?,
            waist_score: row.get("waist_score")?,
            total_score: row.get("total_score")?,
            speedometer_zone: db::parsed_column(row, "speedometer_zone")?,
            risk_category: db::parsed_column(row, "risk_category")?,
        },
        lab_notes: row.get("lab_notes")?,
        recorded_by: db::optional_parsed_column(row, "recorded_by")?,
        created_at: db::timestamp_column(row, "created_at")?,
    })
}
