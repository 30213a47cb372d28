use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use uuid::Uuid;

use homa_export::render::{self, ReportContext};

use crate::error::ApiError;
use crate::state::AppState;

fn report_context(state: &AppState, id: Uuid) -> Result<ReportContext, ApiError> {
    let assessment = state.store.get_assessment(id)?;
    let patient = state.store.get_patient(assessment.patient_id)?;
    Ok(ReportContext::new(&patient, &assessment))
}

/// Printable HTML view of one assessment.
pub async fn report_html(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Html<String>, ApiError> {
    let Path(id) = id?;
    let report = report_context(&state, id)?;
    Ok(Html(render::render_html(&report)?))
}

pub async fn report_docx(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id?;
    let report = report_context(&state, id)?;
    let bytes = render::render_docx(&report, &state.styles)?;
    tracing::info!(assessment_id = %id, bytes = bytes.len(), "exported docx report");

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                    .to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"homa-report-{id}.docx\""),
            ),
        ],
        bytes,
    ))
}
