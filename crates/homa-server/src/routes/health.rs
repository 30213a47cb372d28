use axum::extract::State;
use axum::Json;
use serde::Serialize;

use homa_storage::RecordCounts;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    records: RecordCounts,
}

/// Liveness plus a database round-trip.
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let records = state.store.counts()?;
    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        records,
    }))
}
