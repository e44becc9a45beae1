//! Property tests: leg order does not change aggregate exposure or shape

use proptest::prelude::*;
use rust_decimal::Decimal;
use strategy_auditor::audit::{aggregate, classify, evaluate};
use strategy_auditor::{Action, Leg, OptionType};

fn leg_strategy() -> impl Strategy<Value = Leg> {
    (
        prop_oneof![Just(OptionType::Call), Just(OptionType::Put)],
        prop_oneof![Just(Action::Buy), Just(Action::Sell)],
        0i64..=1000,
    )
        .prop_map(|(option_type, action, milli)| {
            Leg::new(option_type, action, Decimal::new(milli, 3))
        })
}

fn legs_and_shuffle() -> impl Strategy<Value = (Vec<Leg>, Vec<Leg>)> {
    prop::collection::vec(leg_strategy(), 0..8)
        .prop_flat_map(|legs| (Just(legs.clone()), Just(legs).prop_shuffle()))
}

proptest! {
    #[test]
    fn shuffled_legs_keep_exposure((legs, shuffled) in legs_and_shuffle()) {
        let a = aggregate(&legs);
        let b = aggregate(&shuffled);

        prop_assert_eq!(a.leg_count, b.leg_count);
        prop_assert_eq!(a.net_delta, b.net_delta);
        prop_assert_eq!(a.has_short_call, b.has_short_call);
        prop_assert_eq!(a.has_short_put, b.has_short_put);
        prop_assert_eq!(classify(&a), classify(&b));
    }

    #[test]
    fn shuffled_legs_keep_bias_and_net_delta((legs, shuffled) in legs_and_shuffle()) {
        let a = evaluate(&legs);
        let b = evaluate(&shuffled);

        prop_assert_eq!(a.strategy, b.strategy);
        prop_assert_eq!(a.directional_bias, b.directional_bias);
        prop_assert_eq!(a.net_delta, b.net_delta);
    }

    #[test]
    fn probability_is_never_negative(legs in prop::collection::vec(leg_strategy(), 0..8)) {
        prop_assert!(evaluate(&legs).prob_of_success.value() >= Decimal::ZERO);
    }

    #[test]
    fn net_delta_has_at_most_three_places(legs in prop::collection::vec(leg_strategy(), 0..8)) {
        prop_assert!(evaluate(&legs).net_delta.scale() <= 3);
    }
}
