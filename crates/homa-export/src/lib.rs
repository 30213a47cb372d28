//! homa-export
//!
//! Assessment reports: Markdown and printable HTML via Tera, DOCX via docx-rs.

pub mod docx;
pub mod error;
pub mod render;
pub mod styles;
