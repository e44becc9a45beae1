//! StrategyAuditor - Main Entry Point
//!
//! Command-line front end: collects legs from flags, presets or config,
//! validates them and prints the audit.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::FmtSubscriber;

use strategy_auditor::audit::evaluate;
use strategy_auditor::config::{load_config, parse_log_level, AppConfig};
use strategy_auditor::input::{check_leg_count, LegDraft, LegForm, Preset};
use strategy_auditor::report::{render, status_line, AuditReport, OutputFormat};
use strategy_auditor::AuditError;

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "AUDITOR_LOG_LEVEL")]
    log_level: Option<String>,

    /// Load a preset strategy
    #[arg(short, long, value_enum)]
    preset: Option<Preset>,

    /// Leg as type:action:delta, e.g. call:sell:0.15 (repeatable, replaces preset)
    #[arg(short, long = "leg", value_name = "TYPE:ACTION:DELTA")]
    legs: Vec<LegDraft>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Fewest legs considered a complete strategy
    #[arg(long)]
    min_legs: Option<usize>,

    /// Evaluate even when fewer than --min-legs legs are given
    #[arg(long)]
    allow_incomplete: bool,
}

fn main() -> ExitCode {
    // Load environment variables from .env file first so clap `env` fallbacks see them
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let config = match load_config(Some(&args.config)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let level = parse_log_level(
        args.log_level
            .as_deref()
            .unwrap_or(&config.settings.log_level),
    );

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {}", e);
    }

    debug!("Configuration file: {}", args.config);

    match run(&args, &config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => match e.downcast_ref::<AuditError>() {
            Some(err @ (AuditError::InvalidInput(_) | AuditError::InsufficientLegs { .. })) => {
                error!("Input rejected");
                eprintln!("Input error:\n{}", err);
                ExitCode::from(2)
            }
            _ => {
                error!(error = %e, "Audit failed");
                eprintln!("Calculation error: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

/// Build the form, validate, evaluate and render
fn run(args: &Args, config: &AppConfig) -> Result<String> {
    let form = build_form(args, config);
    let legs = form.submit()?;

    let min_legs = args.min_legs.unwrap_or(config.audit.min_legs);
    let allow_incomplete = args.allow_incomplete || config.audit.allow_incomplete;
    check_leg_count(&legs, min_legs, allow_incomplete)?;

    let result = evaluate(&legs);
    info!("{}", status_line(&result));

    let format = args.format.unwrap_or(config.settings.output_format);
    let report = AuditReport::new(legs, result);
    Ok(render(&report, format)?)
}

fn build_form(args: &Args, config: &AppConfig) -> LegForm {
    if !args.legs.is_empty() {
        return LegForm::with_drafts(args.legs.clone());
    }

    let mut form = LegForm::new();
    if let Some(preset) = args.preset.or(config.audit.default_preset) {
        form.apply_preset(preset);
    }
    form
}
