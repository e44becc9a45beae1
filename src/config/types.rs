//! Configuration types

use serde::{Deserialize, Serialize};

use crate::input::Preset;
use crate::report::OutputFormat;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Input validation and form defaults
    #[serde(default)]
    pub audit: AuditSettings,
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

/// Rules applied before legs are evaluated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditSettings {
    /// Fewest legs considered a complete strategy
    #[serde(default = "default_min_legs")]
    pub min_legs: usize,
    /// Evaluate anyway when below `min_legs` (a warning is still logged)
    #[serde(default)]
    pub allow_incomplete: bool,
    /// Preset loaded when no legs are given explicitly
    #[serde(default)]
    pub default_preset: Option<Preset>,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            min_legs: default_min_legs(),
            allow_incomplete: false,
            default_preset: None,
        }
    }
}

fn default_min_legs() -> usize {
    2
}

/// General application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Output format for the audit report
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output_format: OutputFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
