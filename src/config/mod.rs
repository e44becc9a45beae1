//! Application configuration

pub mod loader;
pub mod types;

pub use loader::{load_config, load_from_env, parse_log_level};
pub use types::{AppConfig, AppSettings, AuditSettings};
