//! Presentation of audit results
//!
//! Renderers only read an [`crate::audit::AuditResult`]; nothing here
//! feeds back into evaluation.

mod format;

pub use format::{render, render_box, status_line, to_json, AuditReport, OutputFormat};
