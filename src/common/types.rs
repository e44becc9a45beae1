//! Domain values shared by the evaluator and the input boundary

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::errors::AuditError;

/// Option contract type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(AuditError::UnknownOptionType(s.to_string())),
        }
    }
}

/// Whether the leg is bought (long) or sold (short)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Buy,
    Sell,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Buy => write!(f, "buy"),
            Action::Sell => write!(f, "sell"),
        }
    }
}

impl FromStr for Action {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" => Ok(Action::Buy),
            "sell" => Ok(Action::Sell),
            _ => Err(AuditError::UnknownAction(s.to_string())),
        }
    }
}

/// A single option leg of a strategy
///
/// `delta` is the absolute delta magnitude as quoted for the contract.
/// Range checking happens at the input boundary, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Leg {
    pub option_type: OptionType,
    pub action: Action,
    pub delta: Decimal,
}

impl Leg {
    pub fn new(option_type: OptionType, action: Action, delta: Decimal) -> Self {
        Self {
            option_type,
            action,
            delta,
        }
    }

    pub fn short_call(delta: Decimal) -> Self {
        Self::new(OptionType::Call, Action::Sell, delta)
    }

    pub fn long_call(delta: Decimal) -> Self {
        Self::new(OptionType::Call, Action::Buy, delta)
    }

    pub fn short_put(delta: Decimal) -> Self {
        Self::new(OptionType::Put, Action::Sell, delta)
    }

    pub fn long_put(delta: Decimal) -> Self {
        Self::new(OptionType::Put, Action::Buy, delta)
    }

    pub fn is_short_call(&self) -> bool {
        self.option_type == OptionType::Call && self.action == Action::Sell
    }

    pub fn is_short_put(&self) -> bool {
        self.option_type == OptionType::Put && self.action == Action::Sell
    }

    /// Delta contribution of this leg to the position
    ///
    /// Long calls and short puts add exposure, short calls and long puts remove it.
    pub fn signed_delta(&self) -> Decimal {
        let d = self.delta.abs();
        match (self.option_type, self.action) {
            (OptionType::Call, Action::Buy) | (OptionType::Put, Action::Sell) => d,
            (OptionType::Call, Action::Sell) | (OptionType::Put, Action::Buy) => -d,
        }
    }
}

impl std::fmt::Display for Leg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} @ {}", self.action, self.option_type, self.delta)
    }
}
