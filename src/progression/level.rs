//! Experience to level conversion.
//!
//! Completing level `n` costs `5n + 5` XP: 10 for level 1, 15 for level 2 and
//! so on. Experience is consumed greedily from level 1 upward; the level is found
//! through the closed-form inverse of the cumulative cost.

use serde::Serialize;

/// Cost increase per level.
pub const LEVEL_COST_STEP: u64 = 5;

/// Cost of completing level 1.
pub const BASE_LEVEL_COST: u64 = 10;

/// Level derived from a total experience value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelState {
    /// Experience the state was computed from (after clamping)
    pub total_experience: u64,
    /// Current level, starting at 1
    pub level: u32,
    /// Experience earned inside the current level
    pub progress_in_level: u64,
    /// Experience needed to complete the current level
    pub required_for_level: u64,
}

impl LevelState {
    /// Experience still missing for the next level.
    pub fn remaining(&self) -> u64 {
        self.required_for_level.saturating_sub(self.progress_in_level)
    }

    /// Progress through the current level (0..1), for progress bars.
    pub fn fraction(&self) -> f32 {
        if self.required_for_level == 0 {
            return 0.0;
        }
        (self.progress_in_level as f64 / self.required_for_level as f64).clamp(0.0, 1.0) as f32
    }
}

/// Cost of completing `level`.
pub fn level_cost(level: u32) -> u64 {
    LEVEL_COST_STEP * u64::from(level) + LEVEL_COST_STEP
}

/// Total experience needed to reach `level` from zero.
pub fn total_xp_for_level(level: u32) -> u64 {
    u64::try_from(xp_to_reach(u64::from(level))).unwrap_or(u64::MAX)
}

// Sum of the costs of levels 1..level: 5(level - 1)(level + 2) / 2.
fn xp_to_reach(level: u64) -> u128 {
    if level <= 1 {
        return 0;
    }
    let level = u128::from(level);
    LEVEL_COST_STEP as u128 * (level - 1) * (level + 2) / 2
}

/// Convert total experience into a [`LevelState`].
///
/// Negative input is treated as zero.
pub fn level_from_xp(xp: i64) -> LevelState {
    let total_experience = u64::try_from(xp).unwrap_or(0);

    // Invert the closed form, then settle any floating point error.
    let estimate = ((9.0 + 1.6 * total_experience as f64).sqrt() - 1.0) / 2.0;
    let mut level = (estimate as u64).max(1);
    while level > 1 && xp_to_reach(level) > u128::from(total_experience) {
        level -= 1;
    }
    while xp_to_reach(level + 1) <= u128::from(total_experience) {
        level += 1;
    }

    let level = u32::try_from(level).unwrap_or(u32::MAX);
    let progress_in_level =
        u64::try_from(u128::from(total_experience) - xp_to_reach(u64::from(level))).unwrap_or(0);

    LevelState {
        total_experience,
        level,
        progress_in_level,
        required_for_level: level_cost(level),
    }
}

/// Convert a possibly fractional or non-finite experience value.
///
/// NaN, infinities and negative values are treated as zero; fractions are
/// floored.
pub fn level_from_fractional_xp(xp: f64) -> LevelState {
    if !xp.is_finite() || xp <= 0.0 {
        return level_from_xp(0);
    }
    level_from_xp(xp.floor() as i64)
}
