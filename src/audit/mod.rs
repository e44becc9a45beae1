//! Strategy evaluation
//!
//! Maps a sequence of option legs to four descriptive metrics.
//!
//! # Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  aggregate(legs)                                            │
//! │    - net delta (sign by type/action on |delta|)             │
//! │    - last-seen short call / short put delta                 │
//! │    - short call / short put presence                        │
//! └─────────────────────────────────────────────────────────────┘
//!        │
//!        ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  classify → StrategyKind                                    │
//! │  DirectionalBias::from_net_delta (±0.05 dead zone)          │
//! │  probability_of_success (floor 0, no cap)                   │
//! └─────────────────────────────────────────────────────────────┘
//!        │
//!        ▼
//!   AuditResult { strategy, directional_bias, net_delta, prob_of_success }
//! ```
//!
//! Everything here is pure: no logging, no I/O, no shared state. Validating
//! deltas and leg counts is the job of [`crate::input`].
//!
//! # Known quirks
//!
//! - Any two-leg strategy without a short call is labelled
//!   [`StrategyKind::BullPutSpread`], even two long calls.
//! - With several short calls (or puts), only the last one in sequence
//!   order feeds the probability of success.
//! - The probability is floored at 0% but never capped at 100%.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use strategy_auditor::audit::{evaluate, StrategyKind};
//! use strategy_auditor::Leg;
//!
//! let result = evaluate(&[Leg::short_call(dec!(0.15)), Leg::long_call(dec!(0.05))]);
//! assert_eq!(result.strategy, StrategyKind::BearCallSpread);
//! assert_eq!(result.prob_of_success.to_string(), "85.00%");
//! ```

mod evaluator;
mod types;

pub use evaluator::{aggregate, classify, evaluate, probability_of_success};

pub use types::{
    AuditResult,
    DirectionalBias,
    Exposure,
    ProbabilityOfSuccess,
    StrategyKind,
    BIAS_THRESHOLD,
};
