use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Build a DOCX document from a rendered Markdown report.
///
/// Understands the subset the report template emits:
/// `#`/`##`/`###` headings, `- ` bullets and `**bold**` spans.
/// Any other non-blank line becomes a body paragraph.
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size))
        .add_style(heading_style("Heading3", "heading 3", styles.heading3_size));

    let mut paragraphs = 0usize;
    for line in rendered.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let paragraph = if let Some(text) = trimmed.strip_prefix("### ") {
            heading_paragraph(text, "Heading3", styles.heading3_size, styles)
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            heading_paragraph(text, "Heading2", styles.heading2_size, styles)
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            heading_paragraph(text, "Heading1", styles.heading1_size, styles)
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            bullet_paragraph(text, styles)
        } else {
            body_paragraph(trimmed, styles)
        };
        docx = docx.add_paragraph(paragraph);
        paragraphs += 1;
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    tracing::debug!(paragraphs, bytes = buf.get_ref().len(), "generated docx report");
    Ok(buf.into_inner())
}

// OOXML sizes are in half-points.
fn half_points(size_pt: usize) -> usize {
    size_pt * 2
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(half_points(size_pt))
}

fn heading_paragraph(text: &str, style_id: &str, size_pt: usize, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .bold()
            .size(half_points(size_pt))
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn bullet_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run("\u{2022} ", styles));
    for run in inline_runs(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Left);
    for run in inline_runs(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(half_points(styles.body_size))
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// Split on `**` markers; odd segments are bold. An unmatched marker is
/// kept as literal text.
fn inline_runs(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let segments: Vec<&str> = text.split("**").collect();
    let balanced = segments.len() % 2 == 1;

    let mut runs = Vec::with_capacity(segments.len());
    for (i, segment) in segments.iter().enumerate() {
        let is_last = i + 1 == segments.len();
        if !balanced && is_last {
            runs.push(body_run(&format!("**{segment}"), styles));
            continue;
        }
        if segment.is_empty() {
            continue;
        }
        let run = body_run(segment, styles);
        runs.push(if i % 2 == 1 { run.bold() } else { run });
    }
    runs
}
