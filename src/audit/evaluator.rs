use rust_decimal::{Decimal, RoundingStrategy};

use crate::audit::types::{
    AuditResult, DirectionalBias, Exposure, ProbabilityOfSuccess, StrategyKind,
};
use crate::common::types::Leg;

/// Net delta, short-leg deltas and short-leg presence across all legs
pub fn aggregate(legs: &[Leg]) -> Exposure {
    let mut exposure = Exposure {
        leg_count: legs.len(),
        ..Exposure::default()
    };

    for leg in legs {
        exposure.net_delta += leg.signed_delta();

        // Later short legs overwrite earlier ones
        if leg.is_short_call() {
            exposure.short_call_delta = leg.delta.abs();
            exposure.has_short_call = true;
        } else if leg.is_short_put() {
            exposure.short_put_delta = leg.delta.abs();
            exposure.has_short_put = true;
        }
    }

    exposure
}

/// Shape of the strategy from its leg count and which short legs it carries
pub fn classify(exposure: &Exposure) -> StrategyKind {
    match exposure.leg_count {
        2 if exposure.has_short_call => StrategyKind::BearCallSpread,
        2 => StrategyKind::BullPutSpread,
        4 if exposure.has_short_call && exposure.has_short_put => StrategyKind::IronCondor,
        _ => StrategyKind::Unknown,
    }
}

/// One minus the delta of the short strike(s) at risk
pub fn probability_of_success(strategy: StrategyKind, exposure: &Exposure) -> ProbabilityOfSuccess {
    let at_risk = if strategy == StrategyKind::IronCondor {
        exposure.short_call_delta + exposure.short_put_delta
    } else if exposure.has_short_call {
        exposure.short_call_delta
    } else {
        exposure.short_put_delta
    };

    ProbabilityOfSuccess::new(Decimal::ONE - at_risk)
}

/// Evaluate a strategy
///
/// Total over any slice of legs. An empty slice evaluates to an
/// `Unknown`, neutral strategy with a 100% probability of success.
pub fn evaluate(legs: &[Leg]) -> AuditResult {
    let exposure = aggregate(legs);
    let strategy = classify(&exposure);

    let mut net_delta = exposure
        .net_delta
        .round_dp_with_strategy(3, RoundingStrategy::MidpointNearestEven);
    if net_delta.is_zero() {
        // No "-0.000" in reports
        net_delta = Decimal::ZERO;
    }

    AuditResult {
        strategy,
        directional_bias: DirectionalBias::from_net_delta(exposure.net_delta),
        net_delta,
        prob_of_success: probability_of_success(strategy, &exposure),
    }
}
