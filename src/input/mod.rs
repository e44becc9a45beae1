//! Input boundary between a user-facing front end and the evaluator
//!
//! Front ends keep their editable state in a [`LegForm`] of raw
//! [`LegDraft`] rows. Rows are validated as a batch so every bad leg is
//! reported at once, and only validated [`crate::Leg`] values are handed
//! to [`crate::audit::evaluate`].
//!
//! # Example
//!
//! ```
//! use strategy_auditor::input::{LegForm, Preset};
//!
//! let mut form = LegForm::new();
//! form.apply_preset(Preset::BullPut);
//! let legs = form.submit().unwrap();
//! assert_eq!(legs.len(), 2);
//! ```

mod draft;
mod form;

pub use draft::{check_leg_count, parse_delta, validate_drafts, LegDraft};
pub use form::{default_drafts, LegForm, Preset};
