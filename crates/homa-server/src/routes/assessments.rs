use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use homa_core::models::assessment::{Assessment, AssessmentSummary, NewAssessment};
use homa_storage::assessments::AssessmentRecord;
use homa_storage::error::StorageError;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    patient_id: Option<Uuid>,
}

pub async fn list_assessments(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<AssessmentSummary>>, ApiError> {
    let Query(query) = query?;
    Ok(Json(state.store.list_assessments(query.patient_id)?))
}

pub async fn get_assessment(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Assessment>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.store.get_assessment(id)?))
}

/// Record an assessment. Derived fields are always computed here from the
/// submitted measurements.
pub async fn create_assessment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<NewAssessment>, JsonRejection>,
) -> Result<(StatusCode, Json<Assessment>), ApiError> {
    let Json(new) = payload?;
    if !state.store.patient_exists(new.patient_id)? {
        return Err(StorageError::not_found("patient", new.patient_id).into());
    }

    let scores = homa_scoring::compute(&new.measurements);
    let assessment = state.store.insert_assessment(AssessmentRecord {
        patient_id: new.patient_id,
        measurements: new.measurements,
        scores,
        lab_notes: new.lab_notes,
        recorded_by: Some(user.id),
    })?;

    tracing::info!(
        assessment_id = %assessment.id,
        staff_id = %user.id,
        staff_role = user.role.as_str(),
        "assessment submitted"
    );
    Ok((StatusCode::CREATED, Json(assessment)))
}
