use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::common::errors::{AuditError, Result};
use crate::common::types::Leg;
use crate::input::draft::{validate_drafts, LegDraft};

/// Canned strategies a user can load with one action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    IronCondor,
    BullPut,
    BearCall,
}

impl Preset {
    pub fn drafts(&self) -> Vec<LegDraft> {
        match self {
            Preset::IronCondor => vec![
                LegDraft::new("call", "sell", "0.15"),
                LegDraft::new("call", "buy", "0.05"),
                LegDraft::new("put", "sell", "0.15"),
                LegDraft::new("put", "buy", "0.05"),
            ],
            Preset::BullPut => vec![
                LegDraft::new("put", "sell", "0.20"),
                LegDraft::new("put", "buy", "0.10"),
            ],
            Preset::BearCall => vec![
                LegDraft::new("call", "sell", "0.20"),
                LegDraft::new("call", "buy", "0.10"),
            ],
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Preset::IronCondor => write!(f, "iron-condor"),
            Preset::BullPut => write!(f, "bull-put"),
            Preset::BearCall => write!(f, "bear-call"),
        }
    }
}

/// Rows a fresh or cleared form starts with: a two-leg call spread
pub fn default_drafts() -> Vec<LegDraft> {
    vec![
        LegDraft::new("call", "sell", "0.15"),
        LegDraft::new("call", "buy", "0.05"),
    ]
}

/// Work-in-progress list of legs being edited
///
/// Owns raw text only. Nothing here reaches the evaluator until
/// [`LegForm::submit`] has validated every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegForm {
    drafts: Vec<LegDraft>,
}

impl Default for LegForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LegForm {
    pub fn new() -> Self {
        Self {
            drafts: default_drafts(),
        }
    }

    /// Form holding exactly the given rows
    pub fn with_drafts(drafts: Vec<LegDraft>) -> Self {
        Self { drafts }
    }

    pub fn drafts(&self) -> &[LegDraft] {
        &self.drafts
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    pub fn add_leg(&mut self, draft: LegDraft) {
        self.drafts.push(draft);
    }

    /// Remove the row at `index` (0-based); the last remaining row stays
    pub fn remove_leg(&mut self, index: usize) -> Result<LegDraft> {
        if self.drafts.len() <= 1 {
            return Err(AuditError::LastLeg);
        }
        if index >= self.drafts.len() {
            return Err(AuditError::LegIndex {
                index,
                len: self.drafts.len(),
            });
        }
        Ok(self.drafts.remove(index))
    }

    /// Mutable access to one row for in-place edits
    pub fn leg_mut(&mut self, index: usize) -> Result<&mut LegDraft> {
        let len = self.drafts.len();
        self.drafts
            .get_mut(index)
            .ok_or(AuditError::LegIndex { index, len })
    }

    /// Reset to the default rows
    pub fn clear(&mut self) {
        self.drafts = default_drafts();
    }

    /// Replace all rows with a preset
    pub fn apply_preset(&mut self, preset: Preset) {
        debug!(%preset, "Loading preset");
        self.drafts = preset.drafts();
    }

    /// Validate every row and hand back immutable legs
    pub fn submit(&self) -> Result<Vec<Leg>> {
        let legs = validate_drafts(&self.drafts)?;
        info!(legs = legs.len(), "Form validated");
        Ok(legs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_form_has_default_rows() {
        let form = LegForm::new();
        assert_eq!(form.len(), 2);
        assert_eq!(
            form.submit().unwrap(),
            vec![Leg::short_call(dec!(0.15)), Leg::long_call(dec!(0.05))]
        );
    }

    #[test]
    fn test_remove_refuses_last_leg() {
        let mut form = LegForm::new();
        form.remove_leg(0).unwrap();
        assert_eq!(form.len(), 1);
        assert!(matches!(form.remove_leg(0), Err(AuditError::LastLeg)));
        assert_eq!(form.len(), 1);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut form = LegForm::new();
        assert!(matches!(
            form.remove_leg(5),
            Err(AuditError::LegIndex { index: 5, len: 2 })
        ));
    }

    #[test]
    fn test_clear_restores_defaults() {
        let mut form = LegForm::new();
        form.apply_preset(Preset::IronCondor);
        assert_eq!(form.len(), 4);
        form.clear();
        assert_eq!(form, LegForm::new());
    }

    #[test]
    fn test_edit_in_place() {
        let mut form = LegForm::new();
        form.leg_mut(1).unwrap().delta = "0.07".to_string();
        assert_eq!(form.submit().unwrap()[1], Leg::long_call(dec!(0.07)));
        assert!(form.leg_mut(9).is_err());
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(Preset::from_str("bull-put", true).unwrap(), Preset::BullPut);
        assert_eq!(Preset::IronCondor.to_string(), "iron-condor");
        assert_eq!(Preset::BearCall.drafts().len(), 2);
    }
}
