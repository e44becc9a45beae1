//! Input boundary: drafts, presets and validation feeding the evaluator

mod common;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use strategy_auditor::audit::evaluate;
use strategy_auditor::input::{check_leg_count, validate_drafts, LegDraft, LegForm, Preset};
use strategy_auditor::{AuditError, Leg, StrategyKind};

fn drafts(specs: &[&str]) -> Vec<LegDraft> {
    specs.iter().map(|s| s.parse().unwrap()).collect()
}

#[test_log::test]
fn test_presets_evaluate_to_their_shape() {
    let mut form = LegForm::new();

    form.apply_preset(Preset::IronCondor);
    assert_eq!(evaluate(&form.submit().unwrap()).strategy, StrategyKind::IronCondor);

    form.apply_preset(Preset::BullPut);
    let result = evaluate(&form.submit().unwrap());
    assert_eq!(result.strategy, StrategyKind::BullPutSpread);
    assert_eq!(result.prob_of_success.to_string(), "80.00%");

    form.apply_preset(Preset::BearCall);
    let result = evaluate(&form.submit().unwrap());
    assert_eq!(result.strategy, StrategyKind::BearCallSpread);
    assert_eq!(result.prob_of_success.to_string(), "80.00%");
}

#[test]
fn test_default_form_is_bear_call_spread() {
    let legs = LegForm::new().submit().unwrap();
    assert_eq!(legs, common::bear_call_spread());
}

#[test]
fn test_cli_specs_match_fixture() {
    let legs = validate_drafts(&drafts(&common::leg_specs::IRON_CONDOR)).unwrap();
    assert_eq!(legs, common::iron_condor());
}

#[test]
fn test_type_and_action_are_case_insensitive() {
    let legs = validate_drafts(&drafts(&common::leg_specs::MIXED_CASE)).unwrap();
    assert_eq!(legs, common::bear_call_spread());
}

#[test_log::test]
fn test_invalid_rows_never_reach_evaluator() {
    let mut form = LegForm::new();
    form.add_leg(LegDraft::new("put", "sell", "1.2"));
    form.add_leg(LegDraft::new("put", "buy", "n/a"));
    form.add_leg(LegDraft::new("straddle", "sell", "0.1"));

    let err = form.submit().unwrap_err();
    match err {
        AuditError::InvalidInput(errors) => {
            assert_eq!(
                errors.messages(),
                &[
                    "Leg 3: Delta must be between 0.0 and 1.0".to_string(),
                    "Leg 4: Invalid delta value 'n/a'".to_string(),
                    "Leg 5: Unknown option type 'straddle' (expected call or put)".to_string(),
                ]
            );
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test_log::test]
fn test_single_leg_warns_and_aborts_by_default() {
    let mut form = LegForm::new();
    form.remove_leg(1).unwrap();
    let legs = form.submit().unwrap();

    assert!(matches!(
        check_leg_count(&legs, 2, false),
        Err(AuditError::InsufficientLegs { required: 2, actual: 1 })
    ));

    check_leg_count(&legs, 2, true).unwrap();
    let result = evaluate(&legs);
    assert_eq!(result.strategy, StrategyKind::Unknown);
    assert_eq!(result.prob_of_success.to_string(), "85.00%");
}

#[test]
fn test_draft_round_trip_from_leg() {
    let draft = LegDraft::from(Leg::short_put(dec!(0.20)));
    assert_eq!(draft, LegDraft::new("put", "sell", "0.20"));
}
