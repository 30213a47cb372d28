use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Serialize;

use homa_core::models::measurements::MeasurementSet;
use homa_core::models::scores::ScoreResult;
use homa_scoring::interpret::{interpret, Interpretation};
use homa_scoring::rules::{catalogue, RuleCatalogue};
use homa_scoring::{advice, ScoreContribution};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct PreviewResponse {
    scores: ScoreResult,
    breakdown: Vec<ScoreContribution>,
    interpretation: Interpretation,
    summary: &'static str,
    recommendations: Vec<&'static str>,
}

pub async fn rules() -> Json<RuleCatalogue> {
    Json(catalogue())
}

/// Score a measurement set without storing anything. Backs the live
/// calculator in the intake form.
pub async fn preview(
    payload: Result<Json<MeasurementSet>, JsonRejection>,
) -> Result<Json<PreviewResponse>, ApiError> {
    let Json(measurements) = payload?;
    let scores = homa_scoring::compute(&measurements);

    Ok(Json(PreviewResponse {
        breakdown: homa_scoring::breakdown(&measurements),
        interpretation: interpret(&scores),
        summary: advice::summary(scores.risk_category),
        recommendations: advice::recommendations(&measurements, &scores),
        scores,
    }))
}
