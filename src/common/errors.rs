//! Error types for the application

use thiserror::Error;

/// Result type alias using our AuditError
pub type Result<T> = std::result::Result<T, AuditError>;

/// Main error type for the input boundary and the binary
///
/// The evaluator itself never fails; everything here is raised before
/// legs reach it or after its result leaves it.
#[derive(Error, Debug)]
pub enum AuditError {
    /// Delta text that does not parse as a number
    #[error("Invalid delta value '{0}'")]
    InvalidDelta(String),

    /// Delta outside the [0.0, 1.0] range
    #[error("Delta must be between 0.0 and 1.0")]
    DeltaOutOfRange(String),

    /// Option type other than call/put
    #[error("Unknown option type '{0}' (expected call or put)")]
    UnknownOptionType(String),

    /// Action other than buy/sell
    #[error("Unknown action '{0}' (expected buy or sell)")]
    UnknownAction(String),

    /// Malformed `type:action:delta` leg specification
    #[error("Invalid leg specification '{0}' (expected type:action:delta)")]
    InvalidLegSpec(String),

    /// Too few legs for a complete strategy
    #[error("A complete strategy typically requires at least {required} legs, got {actual}")]
    InsufficientLegs { required: usize, actual: usize },

    /// Attempt to remove the only remaining leg
    #[error("Strategy must have at least one leg")]
    LastLeg,

    /// Leg index outside the form
    #[error("No leg at position {index} (form has {len} legs)")]
    LegIndex { index: usize, len: usize },

    /// One or more legs failed validation
    #[error("{0}")]
    InvalidInput(InputErrors),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Per-leg validation failures, collected across the whole form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputErrors {
    messages: Vec<String>,
}

impl InputErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for the leg at `position` (1-based)
    pub fn push(&mut self, position: usize, err: &AuditError) {
        self.messages.push(format!("Leg {}: {}", position, err));
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

impl std::fmt::Display for InputErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.messages.join("\n"))
    }
}

impl From<InputErrors> for AuditError {
    fn from(errors: InputErrors) -> Self {
        AuditError::InvalidInput(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_join_lines() {
        let mut errors = InputErrors::new();
        errors.push(1, &AuditError::InvalidDelta("abc".to_string()));
        errors.push(3, &AuditError::DeltaOutOfRange("1.5".to_string()));

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.to_string(),
            "Leg 1: Invalid delta value 'abc'\nLeg 3: Delta must be between 0.0 and 1.0"
        );
    }

    #[test]
    fn test_insufficient_legs_message() {
        let err = AuditError::InsufficientLegs { required: 2, actual: 1 };
        assert_eq!(
            err.to_string(),
            "A complete strategy typically requires at least 2 legs, got 1"
        );
    }
}
