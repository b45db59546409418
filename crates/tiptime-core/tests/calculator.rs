//! End-to-end checks of the tip calculation, from raw text to tip.

use tiptime_core::input::parse_service_cost;
use tiptime_core::{Money, TipCalculator, TipError, TipTier};

const COSTS: [f64; 8] = [0.0, 0.01, 1.0, 9.99, 33.33, 50.0, 123.45, 10_000.5];

#[test]
fn test_scenario_table() {
    let cases = [
        ("50.00", TipTier::Twenty, false, 10.0),
        ("50.00", TipTier::Twenty, true, 10.0),
        ("33.33", TipTier::Fifteen, true, 5.0),
        ("80", TipTier::Ten, false, 8.0),
        ("19.99", TipTier::Ten, true, 2.0),
    ];

    for (raw, tier, round_up, expected) in cases {
        let tip = TipCalculator::compute(parse_service_cost(raw), tier, round_up).unwrap();
        assert_eq!(tip, expected, "{raw} at {tier} (round_up={round_up})");
    }
}

#[test]
fn test_unparsable_cost_fails_without_result() {
    for raw in ["", "   ", "fifty", "12.3.4", "-10"] {
        let result = TipCalculator::compute(parse_service_cost(raw), TipTier::Fifteen, true);
        assert!(
            matches!(result, Err(TipError::InvalidInput { .. })),
            "{raw:?} should be rejected"
        );
    }
}

#[test]
fn test_without_round_up_tip_is_cost_times_rate() {
    for tier in TipTier::ALL {
        for cost in COSTS {
            let tip = TipCalculator::compute(Some(cost), tier, false).unwrap();
            let expected = cost * tier.rate();
            assert!(
                (tip - expected).abs() <= expected.abs() * 1e-15 + f64::EPSILON,
                "{cost} at {tier}: {tip} != {expected}"
            );
        }
    }
}

#[test]
fn test_round_up_is_integral_ceiling() {
    for tier in TipTier::ALL {
        for cost in COSTS {
            let exact = TipCalculator::compute(Some(cost), tier, false).unwrap();
            let rounded = TipCalculator::compute(Some(cost), tier, true).unwrap();
            assert_eq!(rounded.fract(), 0.0);
            assert_eq!(rounded, exact.ceil());
            assert!(rounded >= exact && rounded - exact < 1.0);
        }
    }
}

#[test]
fn test_compute_is_idempotent() {
    for tier in TipTier::ALL {
        for round_up in [false, true] {
            let first = TipCalculator::compute(Some(123.45), tier, round_up);
            let second = TipCalculator::compute(Some(123.45), tier, round_up);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_tip_converts_to_display_money() {
    let tip = TipCalculator::compute(Some(33.33), TipTier::Fifteen, false).unwrap();
    assert_eq!(Money::from_amount(tip).unwrap().cents(), 500);

    let tip = TipCalculator::compute(Some(123.45), TipTier::Twenty, false).unwrap();
    assert_eq!(Money::from_amount(tip).unwrap().cents(), 2469);
}
