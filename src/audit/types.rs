use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Serialize, Serializer};

/// Net delta beyond which a position is considered directional
pub const BIAS_THRESHOLD: Decimal = dec!(0.05);

/// Classified strategy shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StrategyKind {
    #[serde(rename = "Bear Call Spread")]
    BearCallSpread,
    /// Also the label for any two-leg position without a short call,
    /// whether or not its legs are puts.
    #[serde(rename = "Bull Put Spread")]
    BullPutSpread,
    #[serde(rename = "Iron Condor")]
    IronCondor,
    Unknown,
}

impl StrategyKind {
    pub fn label(&self) -> &'static str {
        match self {
            StrategyKind::BearCallSpread => "Bear Call Spread",
            StrategyKind::BullPutSpread => "Bull Put Spread",
            StrategyKind::IronCondor => "Iron Condor",
            StrategyKind::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// Directional lean of the position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DirectionalBias {
    Bullish,
    Bearish,
    Neutral,
}

impl DirectionalBias {
    /// Exactly ±0.05 is still neutral
    pub fn from_net_delta(net_delta: Decimal) -> Self {
        if net_delta > BIAS_THRESHOLD {
            DirectionalBias::Bullish
        } else if net_delta < -BIAS_THRESHOLD {
            DirectionalBias::Bearish
        } else {
            DirectionalBias::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DirectionalBias::Bullish => "Bullish",
            DirectionalBias::Bearish => "Bearish",
            DirectionalBias::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for DirectionalBias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// Estimated probability that the position expires profitable
///
/// Floored at zero but not capped at one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProbabilityOfSuccess(Decimal);

impl ProbabilityOfSuccess {
    pub fn new(raw: Decimal) -> Self {
        Self(raw.max(Decimal::ZERO))
    }

    /// Fraction, e.g. 0.85
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Percentage with two decimals, e.g. "85.00%"
    pub fn as_percent(&self) -> String {
        let pct = (self.0 * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        format!("{:.2}%", pct)
    }
}

impl std::fmt::Display for ProbabilityOfSuccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.as_percent())
    }
}

impl Serialize for ProbabilityOfSuccess {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_percent())
    }
}

/// Aggregated exposure of a leg sequence
///
/// `short_call_delta` and `short_put_delta` hold the magnitude of the
/// last matching leg in sequence order, not a sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Exposure {
    pub leg_count: usize,
    pub net_delta: Decimal,
    pub short_call_delta: Decimal,
    pub short_put_delta: Decimal,
    pub has_short_call: bool,
    pub has_short_put: bool,
}

/// Derived metrics for one strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuditResult {
    pub strategy: StrategyKind,
    pub directional_bias: DirectionalBias,
    /// Rounded to 3 decimal places, serialized as a JSON number
    #[serde(with = "rust_decimal::serde::float")]
    pub net_delta: Decimal,
    pub prob_of_success: ProbabilityOfSuccess,
}
