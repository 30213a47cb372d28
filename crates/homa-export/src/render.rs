use serde::Serialize;
use tera::{Context, Tera};

use homa_core::models::assessment::Assessment;
use homa_core::models::measurements::{HistoryFlag, NumericField};
use homa_core::models::patient::Patient;
use homa_scoring::interpret::interpret;
use homa_scoring::ranges::{reference_range, BMI_RANGE};
use homa_scoring::{advice, ScoreContribution};

use crate::docx::generate_docx;
use crate::error::ExportError;
use crate::styles::DocumentStyles;

const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md.tera");
const HTML_TEMPLATE: &str = include_str!("../templates/report.html.tera");

#[derive(Debug, Clone, Serialize)]
pub struct IndexRow {
    pub name: &'static str,
    pub value: String,
    pub band: Option<&'static str>,
    pub reference: Option<String>,
    pub status: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MeasurementRow {
    pub label: &'static str,
    pub value: String,
    /// Set only for fields with a reference range; depends on the patient's sex.
    pub reference: Option<String>,
    pub status: Option<&'static str>,
}

/// Everything a report template can reference.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub patient: Patient,
    pub assessment_id: String,
    pub recorded_at: String,
    pub indices: Vec<IndexRow>,
    pub measurements: Vec<MeasurementRow>,
    pub history: Vec<&'static str>,
    pub breakdown: Vec<ScoreContribution>,
    pub total_score: u32,
    pub zone: &'static str,
    pub zone_key: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
    pub recommendations: Vec<&'static str>,
    pub lab_notes: Option<String>,
}

impl ReportContext {
    pub fn new(patient: &Patient, assessment: &Assessment) -> Self {
        let m = &assessment.measurements;
        let scores = &assessment.scores;
        let bands = interpret(scores);

        let mut indices = Vec::new();
        if let Some(bmi) = scores.bmi {
            indices.push(IndexRow {
                name: "BMI",
                value: format!("{bmi:.2}"),
                band: bands.bmi.map(|b| b.label()),
                reference: Some(BMI_RANGE.to_string()),
                status: Some(BMI_RANGE.status(Some(bmi)).label()),
            });
        }
        if let Some(homa_ir) = scores.homa_ir {
            indices.push(IndexRow {
                name: "HOMA-IR",
                value: format!("{homa_ir:.2}"),
                band: bands.homa_ir.map(|b| b.label()),
                reference: None,
                status: None,
            });
        }
        if let Some(tyg) = scores.tyg_index {
            indices.push(IndexRow {
                name: "TyG index",
                value: format!("{tyg:.2}"),
                band: bands.tyg_index.map(|b| b.label()),
                reference: None,
                status: None,
            });
        }

        let measurements = NumericField::ALL
            .iter()
            .filter_map(|field| {
                let value = field.get(m)?;
                let range = reference_range(*field, patient.sex);
                Some(MeasurementRow {
                    label: field.label(),
                    value: value.to_string(),
                    reference: range.map(|r| r.to_string()),
                    status: range.map(|r| r.status(Some(value)).label()),
                })
            })
            .collect();

        let history = HistoryFlag::ALL
            .iter()
            .filter(|flag| flag.is_set(m))
            .map(|flag| flag.label())
            .collect();

        Self {
            patient: patient.clone(),
            assessment_id: assessment.id.to_string(),
            recorded_at: assessment
                .created_at
                .strftime("%Y-%m-%d %H:%M UTC")
                .to_string(),
            indices,
            measurements,
            history,
            breakdown: homa_scoring::breakdown(m),
            total_score: scores.total_score,
            zone: scores.speedometer_zone.label(),
            zone_key: scores.speedometer_zone.as_str(),
            category: scores.risk_category.label(),
            summary: advice::summary(scores.risk_category),
            recommendations: advice::recommendations(m, scores),
            lab_notes: assessment
                .lab_notes
                .as_deref()
                .map(str::trim)
                .filter(|notes| !notes.is_empty())
                .map(str::to_string),
        }
    }
}

/// Render a Tera template against a report context.
///
/// Autoescaping follows the template name: names ending in `.html` are
/// escaped, everything else is rendered verbatim.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    report: &ReportContext,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let context = Context::from_serialize(report)?;
    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

pub fn render_markdown(report: &ReportContext) -> Result<String, ExportError> {
    render_template("report.md", MARKDOWN_TEMPLATE, report)
}

/// Printable HTML page for the report.
pub fn render_html(report: &ReportContext) -> Result<String, ExportError> {
    render_template("report.html", HTML_TEMPLATE, report)
}

pub fn render_docx(report: &ReportContext, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let markdown = render_markdown(report)?;
    generate_docx(&markdown, styles)
}
