//! StrategyAuditor Library
//!
//! Descriptive analytics for multi-leg options strategies: classifies the
//! strategy shape, determines directional bias, aggregates net delta and
//! estimates a probability of success.

pub mod audit;
pub mod common;
pub mod config;
pub mod input;
pub mod report;

// Re-export commonly used types
pub use audit::{evaluate, AuditResult, DirectionalBias, ProbabilityOfSuccess, StrategyKind};
pub use common::errors::{AuditError, InputErrors, Result};
pub use common::types::{Action, Leg, OptionType};
pub use config::types::AppConfig;
pub use input::{LegDraft, LegForm, Preset};
pub use report::{AuditReport, OutputFormat};
