//! Unit tests for the level curve.

use classlog::progression::{level_cost, level_from_fractional_xp, level_from_xp, total_xp_for_level};

#[test]
fn test_zero_xp_is_level_one() {
    let state = level_from_xp(0);
    assert_eq!(state.level, 1);
    assert_eq!(state.progress_in_level, 0);
    assert_eq!(state.required_for_level, 10);
}

#[test]
fn test_one_hundred_twenty_xp() {
    // Levels 1-5 cost 10 + 15 + 20 + 25 + 30 = 100
    let state = level_from_xp(120);
    assert_eq!(state.level, 6);
    assert_eq!(state.progress_in_level, 20);
    assert_eq!(state.required_for_level, 35);
    assert_eq!(state.remaining(), 15);
}

#[test]
fn test_costs_grow_by_five() {
    assert_eq!(level_cost(1), 10);
    assert_eq!(level_cost(2), 15);
    assert_eq!(level_cost(10), 55);
    assert_eq!(total_xp_for_level(1), 0);
    assert_eq!(total_xp_for_level(6), 100);
}

#[test]
fn test_level_never_decreases_with_more_xp() {
    let mut previous = 1;
    for xp in (0..20_000).step_by(7) {
        let state = level_from_xp(xp);
        assert!(state.level >= previous);
        assert!(state.progress_in_level < state.required_for_level);
        previous = state.level;
    }
}

#[test]
fn test_invalid_inputs_clamp_to_zero() {
    let zero = level_from_xp(0);
    assert_eq!(level_from_xp(i64::MIN), zero);
    assert_eq!(level_from_fractional_xp(f64::NAN), zero);
    assert_eq!(level_from_fractional_xp(f64::NEG_INFINITY), zero);
    assert_eq!(level_from_fractional_xp(119.99).level, 5);
}
