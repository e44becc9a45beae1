//! Configuration loader

use config::{Config, Environment, File};
use std::path::Path;
use std::str::FromStr;

use super::types::{AppConfig, AppSettings, AuditSettings};
use crate::common::errors::{AuditError, Result};
use crate::input::Preset;
use crate::report::OutputFormat;

/// Load configuration from file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with APP_, `__` between sections)
/// 2. Configuration file (TOML format)
/// 3. Default values
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        if Path::new(path).exists() {
            builder = builder.add_source(File::with_name(path).required(false));
        }
    }

    builder = builder.add_source(
        Environment::with_prefix("APP")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder
        .build()
        .map_err(|e| AuditError::Configuration(e.to_string()))?;

    config
        .try_deserialize()
        .map_err(|e| AuditError::Configuration(e.to_string()))
}

/// Load configuration from `AUDITOR_*` environment variables only
pub fn load_from_env() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut audit = AuditSettings::default();
    if let Ok(raw) = std::env::var("AUDITOR_MIN_LEGS") {
        audit.min_legs = raw
            .trim()
            .parse()
            .map_err(|_| AuditError::Configuration(format!("invalid AUDITOR_MIN_LEGS '{}'", raw)))?;
    }
    if let Ok(raw) = std::env::var("AUDITOR_ALLOW_INCOMPLETE") {
        audit.allow_incomplete = matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes");
    }
    if let Ok(raw) = std::env::var("AUDITOR_PRESET") {
        let preset = <Preset as clap::ValueEnum>::from_str(raw.trim(), true)
            .map_err(|e| AuditError::Configuration(format!("invalid AUDITOR_PRESET: {}", e)))?;
        audit.default_preset = Some(preset);
    }

    let mut settings = AppSettings::default();
    if let Ok(level) = std::env::var("AUDITOR_LOG_LEVEL") {
        settings.log_level = level;
    }
    if let Ok(raw) = std::env::var("AUDITOR_OUTPUT_FORMAT") {
        settings.output_format = <OutputFormat as clap::ValueEnum>::from_str(raw.trim(), true)
            .map_err(|e| AuditError::Configuration(format!("invalid AUDITOR_OUTPUT_FORMAT: {}", e)))?;
    }

    Ok(AppConfig { audit, settings })
}

/// Parse a log level name, defaulting to INFO
pub fn parse_log_level(level: &str) -> tracing::Level {
    tracing::Level::from_str(level.trim()).unwrap_or(tracing::Level::INFO)
}
