use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::common::errors::{AuditError, InputErrors, Result};
use crate::common::types::{Action, Leg, OptionType};

/// Unvalidated leg as entered by a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegDraft {
    pub option_type: String,
    pub action: String,
    pub delta: String,
}

impl LegDraft {
    pub fn new(
        option_type: impl Into<String>,
        action: impl Into<String>,
        delta: impl Into<String>,
    ) -> Self {
        Self {
            option_type: option_type.into(),
            action: action.into(),
            delta: delta.into(),
        }
    }

    /// Check this row and turn it into a [`Leg`]
    ///
    /// Reports the first problem found; the delta is checked before the
    /// type and action.
    pub fn validate(&self) -> Result<Leg> {
        let delta = parse_delta(&self.delta)?;
        let option_type = OptionType::from_str(&self.option_type)?;
        let action = Action::from_str(&self.action)?;
        Ok(Leg::new(option_type, action, delta))
    }
}

impl From<Leg> for LegDraft {
    fn from(leg: Leg) -> Self {
        Self::new(
            leg.option_type.to_string(),
            leg.action.to_string(),
            leg.delta.to_string(),
        )
    }
}

/// Parse `type:action:delta`, e.g. `put:sell:0.20`
///
/// Only the shape is checked here; field contents are checked by
/// [`LegDraft::validate`].
impl FromStr for LegDraft {
    type Err = AuditError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        match parts.as_slice() {
            [option_type, action, delta] => Ok(Self::new(*option_type, *action, *delta)),
            _ => Err(AuditError::InvalidLegSpec(s.to_string())),
        }
    }
}

/// Parse an absolute delta and check it lies in [0.0, 1.0]
pub fn parse_delta(raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    let delta = match Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
        Ok(delta) => delta,
        Err(_) => {
            // nan, inf and values beyond Decimal's range are still numbers
            let value: f64 = trimmed
                .parse()
                .map_err(|_| AuditError::InvalidDelta(raw.to_string()))?;
            if !(0.0..=1.0).contains(&value) {
                return Err(AuditError::DeltaOutOfRange(raw.to_string()));
            }
            Decimal::try_from(value).map_err(|_| AuditError::InvalidDelta(raw.to_string()))?
        }
    };

    if delta < Decimal::ZERO || delta > Decimal::ONE {
        return Err(AuditError::DeltaOutOfRange(raw.to_string()));
    }

    Ok(delta)
}

/// Validate every draft, collecting all per-leg failures
pub fn validate_drafts(drafts: &[LegDraft]) -> std::result::Result<Vec<Leg>, InputErrors> {
    let mut legs = Vec::with_capacity(drafts.len());
    let mut errors = InputErrors::new();

    for (i, draft) in drafts.iter().enumerate() {
        match draft.validate() {
            Ok(leg) => legs.push(leg),
            Err(e) => {
                debug!(leg = i + 1, error = %e, "Rejected leg");
                errors.push(i + 1, &e);
            }
        }
    }

    if errors.is_empty() {
        Ok(legs)
    } else {
        Err(errors)
    }
}

/// Warn when a strategy has fewer legs than `min_legs`
///
/// Aborts with [`AuditError::InsufficientLegs`] unless `allow_incomplete`.
pub fn check_leg_count(legs: &[Leg], min_legs: usize, allow_incomplete: bool) -> Result<()> {
    if legs.len() >= min_legs {
        return Ok(());
    }

    warn!(
        "A complete strategy typically requires at least {} legs, got {}",
        min_legs,
        legs.len()
    );

    if allow_incomplete {
        Ok(())
    } else {
        Err(AuditError::InsufficientLegs {
            required: min_legs,
            actual: legs.len(),
        })
    }
}
