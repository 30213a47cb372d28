use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use homa_core::models::patient::{Patient, PatientInput};
use homa_core::validation;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_patients(State(state): State<AppState>) -> Result<Json<Vec<Patient>>, ApiError> {
    Ok(Json(state.store.list_patients()?))
}

pub async fn create_patient(
    State(state): State<AppState>,
    payload: Result<Json<PatientInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Patient>), ApiError> {
    let Json(input) = payload?;
    let new = validation::validate_new_patient(input)?;
    let patient = state.store.insert_patient(new)?;
    Ok((StatusCode::CREATED, Json(patient)))
}

pub async fn get_patient(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Patient>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.store.get_patient(id)?))
}

/// Partial update: only the fields present in the body change.
pub async fn update_patient(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<PatientInput>, JsonRejection>,
) -> Result<Json<Patient>, ApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let changes = validation::validate_patient_changes(input)?;
    Ok(Json(state.store.update_patient(id, changes)?))
}

/// Removes the patient and, through the cascade, their assessments.
pub async fn delete_patient(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.store.delete_patient(id)?;
    Ok(StatusCode::NO_CONTENT)
}
