//! Level and achievement resolution.
//!
//! Achievements award XP, XP decides the level, and some achievements require
//! a level. The engine starts from the level implied by base XP alone,
//! evaluates achievements at that level, recomputes the level with the
//! achievement XP included and repeats until the unlock set stops changing.
//! Every pass evaluates against the caller's previous unlocks, so a repeatable
//! achievement advances at most once per computation. Re-evaluations are
//! capped at the catalog size.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use super::aggregator::{aggregate, Counts};
use super::level::{level_from_xp, LevelState};
use crate::achievements::{AchievementCatalog, AchievementEvaluator, UnlockMap};
use crate::catalog::ClassDefinition;
use crate::logs::LogRecord;

/// XP awarded for raw activity, before achievements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XpRules {
    /// XP per log record
    pub per_log: u64,
    /// XP per custom class
    pub per_custom_class: u64,
    /// XP per custom lesson
    pub per_custom_lesson: u64,
}

impl Default for XpRules {
    fn default() -> Self {
        Self {
            per_log: 10,
            per_custom_class: 10,
            per_custom_lesson: 5,
        }
    }
}

impl XpRules {
    /// Rules that only reward logging.
    pub fn logs_only() -> Self {
        Self {
            per_custom_class: 0,
            per_custom_lesson: 0,
            ..Default::default()
        }
    }

    /// XP earned from counts alone.
    pub fn base_experience(&self, counts: &Counts) -> u64 {
        (counts.total_logs as u64)
            .saturating_mul(self.per_log)
            .saturating_add((counts.custom_class_count as u64).saturating_mul(self.per_custom_class))
            .saturating_add((counts.custom_lesson_count as u64).saturating_mul(self.per_custom_lesson))
    }
}

/// Everything the levels screen needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub counts: Counts,
    /// XP from logs and custom content
    pub base_experience: u64,
    /// XP from all current unlocks
    pub achievement_experience: u64,
    /// XP newly awarded relative to the previous unlocks
    pub xp_gained: u64,
    pub level: LevelState,
    pub unlocks: UnlockMap,
    /// Evaluation passes used to reach a stable unlock set
    pub passes: usize,
}

/// Computes levels and unlocks from logs and classes.
pub struct ProgressEngine<'a> {
    evaluator: AchievementEvaluator<'a>,
    rules: XpRules,
}

impl<'a> ProgressEngine<'a> {
    pub fn new(catalog: &'a AchievementCatalog, rules: XpRules, offset: FixedOffset) -> Self {
        Self {
            evaluator: AchievementEvaluator::new(catalog, offset),
            rules,
        }
    }

    pub fn rules(&self) -> &XpRules {
        &self.rules
    }

    /// Compute the progress report for the given history.
    pub fn compute(
        &self,
        logs: &[LogRecord],
        classes: &[ClassDefinition],
        previous: &UnlockMap,
    ) -> ProgressReport {
        let counts = aggregate(logs, classes);
        let base_experience = self.rules.base_experience(&counts);
        let max_passes = self.evaluator.catalog().len() + 1;

        let mut level = level_from_xp(to_xp(base_experience)).level;
        let mut evaluation = self.evaluator.evaluate(&counts, logs, level, previous);
        let mut passes = 1;

        loop {
            let total = base_experience.saturating_add(self.evaluator.unlocked_xp(&evaluation.unlocks));
            let next_level = level_from_xp(to_xp(total)).level;
            if next_level == level {
                break;
            }
            if passes >= max_passes {
                tracing::warn!(
                    passes,
                    level,
                    next_level,
                    "Achievement resolution did not settle; using last evaluation"
                );
                break;
            }

            level = next_level;
            let next = self.evaluator.evaluate(&counts, logs, level, previous);
            passes += 1;
            tracing::debug!(pass = passes, level, unlocked = next.unlocks.len(), "Re-evaluated achievements");

            let settled = next.unlocks == evaluation.unlocks;
            evaluation = next;
            if settled {
                break;
            }
        }

        let achievement_experience = self.evaluator.unlocked_xp(&evaluation.unlocks);
        let level = level_from_xp(to_xp(base_experience.saturating_add(achievement_experience)));

        ProgressReport {
            counts,
            base_experience,
            achievement_experience,
            xp_gained: evaluation.xp_gained,
            level,
            unlocks: evaluation.unlocks,
            passes,
        }
    }
}

fn to_xp(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
