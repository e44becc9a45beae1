//! Common test utilities and fixtures

#![allow(dead_code)]

use rust_decimal_macros::dec;
use strategy_auditor::Leg;

/// Short call 0.15 / long call 0.05
pub fn bear_call_spread() -> Vec<Leg> {
    vec![Leg::short_call(dec!(0.15)), Leg::long_call(dec!(0.05))]
}

/// Short put 0.20 / long put 0.10
pub fn bull_put_spread() -> Vec<Leg> {
    vec![Leg::short_put(dec!(0.20)), Leg::long_put(dec!(0.10))]
}

/// Short strangle at 0.15 with 0.05 wings
pub fn iron_condor() -> Vec<Leg> {
    vec![
        Leg::short_call(dec!(0.15)),
        Leg::long_call(dec!(0.05)),
        Leg::short_put(dec!(0.15)),
        Leg::long_put(dec!(0.05)),
    ]
}

/// Raw `type:action:delta` rows as typed on the command line
pub mod leg_specs {
    pub const IRON_CONDOR: [&str; 4] = [
        "call:sell:0.15",
        "call:buy:0.05",
        "put:sell:0.15",
        "put:buy:0.05",
    ];

    pub const MIXED_CASE: [&str; 2] = ["CALL:Sell:0.15", " Call : BUY : 0.05 "];
}
