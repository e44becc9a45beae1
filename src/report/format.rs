use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::audit::AuditResult;
use crate::common::errors::Result;
use crate::common::types::Leg;

/// How an audit is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Boxed text block
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
    /// Single status line
    Status,
}

/// An audit together with the legs that produced it
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub audited_at: DateTime<Utc>,
    pub legs: Vec<Leg>,
    pub result: AuditResult,
}

impl AuditReport {
    pub fn new(legs: Vec<Leg>, result: AuditResult) -> Self {
        Self {
            audited_at: Utc::now(),
            legs,
            result,
        }
    }
}

/// Fixed-width boxed summary
pub fn render_box(result: &AuditResult) -> String {
    let net_delta = format!("{:.3}", result.net_delta);
    [
        "╔══════════════════════════════════╗".to_string(),
        "║     SWEM TEAM TRADE AUDIT        ║".to_string(),
        "╠══════════════════════════════════╣".to_string(),
        format!("║ Strategy         : {:<16}║", result.strategy),
        format!("║ Directional Bias : {:<16}║", result.directional_bias),
        format!("║ Net Delta        : {:<16}║", net_delta),
        format!("║ Prob of Success  : {:<16}║", result.prob_of_success),
        "╚══════════════════════════════════╝".to_string(),
    ]
    .join("\n")
}

/// One-line summary, e.g. for a status bar or log line
pub fn status_line(result: &AuditResult) -> String {
    format!(
        "Audit: {} | Bias: {} | Δ: {} | POP: {}",
        result.strategy,
        result.directional_bias,
        result.net_delta.normalize(),
        result.prob_of_success
    )
}

pub fn to_json(report: &AuditReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render a report in the requested format
pub fn render(report: &AuditReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_box(&report.result)),
        OutputFormat::Json => to_json(report),
        OutputFormat::Status => Ok(status_line(&report.result)),
    }
}
