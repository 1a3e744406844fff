//! Evaluates the achievement catalog against aggregated data.
//!
//! The evaluator is stateless: the caller passes in the unlock counts from the
//! previous evaluation and receives fresh counts plus the XP gained since.
//! Time-of-day and day-of-week requirements scan the whole log history on every
//! call, so a repeatable achievement of that kind unlocks again on each
//! evaluation until it reaches its limit, even without new logs.

use std::collections::BTreeMap;

use chrono::FixedOffset;

use super::{
    AchievementCatalog, AchievementDefinition, AchievementId, AchievementUnlock, DayOfWeek,
    Requirement,
};
use crate::logs::LogRecord;
use crate::progression::Counts;

/// Unlock counts keyed by achievement id.
pub type UnlockMap = BTreeMap<AchievementId, u32>;

/// Result of one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Achievements whose requirement currently holds, with unlock counts
    pub unlocks: UnlockMap,
    /// XP awarded by this evaluation relative to the previous unlocks
    pub xp_gained: u64,
}

impl Evaluation {
    /// How many times an achievement is unlocked (0 if locked).
    pub fn times_unlocked(&self, id: AchievementId) -> u32 {
        self.unlocks.get(&id).copied().unwrap_or(0)
    }

    /// Whether an achievement is unlocked.
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocks.contains_key(&id)
    }

    /// Unlocks as a list ordered by achievement id.
    pub fn unlock_list(&self) -> Vec<AchievementUnlock> {
        self.unlocks
            .iter()
            .map(|(&achievement_id, &times_unlocked)| AchievementUnlock {
                achievement_id,
                times_unlocked,
            })
            .collect()
    }
}

/// Achievement evaluator bound to a catalog and a local UTC offset.
pub struct AchievementEvaluator<'a> {
    catalog: &'a AchievementCatalog,
    offset: FixedOffset,
}

impl<'a> AchievementEvaluator<'a> {
    pub fn new(catalog: &'a AchievementCatalog, offset: FixedOffset) -> Self {
        Self { catalog, offset }
    }

    pub fn catalog(&self) -> &AchievementCatalog {
        self.catalog
    }

    /// Evaluate every achievement in catalog order.
    pub fn evaluate(
        &self,
        counts: &Counts,
        logs: &[LogRecord],
        level: u32,
        previous: &UnlockMap,
    ) -> Evaluation {
        let mut evaluation = Evaluation::default();

        for achievement in self.catalog.achievements() {
            if !self.is_met(&achievement.requirement, counts, logs, level) {
                continue;
            }

            let prior = previous.get(&achievement.id).copied().unwrap_or(0);
            let (times, gained) = next_unlock_count(achievement, prior);

            if gained {
                evaluation.xp_gained = evaluation.xp_gained.saturating_add(achievement.xp);
                tracing::debug!(
                    achievement = achievement.id,
                    times,
                    "Achievement unlocked: {}",
                    achievement.title
                );
            }
            evaluation.unlocks.insert(achievement.id, times);
        }

        evaluation
    }

    /// Total XP represented by a set of unlocks.
    pub fn unlocked_xp(&self, unlocks: &UnlockMap) -> u64 {
        unlocks
            .iter()
            .filter_map(|(id, times)| {
                self.catalog
                    .get(*id)
                    .map(|a| a.xp.saturating_mul(u64::from(*times)))
            })
            .fold(0, u64::saturating_add)
    }

    /// Whether a single requirement currently holds.
    pub fn is_met(
        &self,
        requirement: &Requirement,
        counts: &Counts,
        logs: &[LogRecord],
        level: u32,
    ) -> bool {
        match requirement {
            Requirement::ClassCount { threshold } => counts.custom_class_count >= *threshold,
            Requirement::LessonCount { threshold } => counts.custom_lesson_count >= *threshold,
            Requirement::LogCount { threshold } => counts.total_logs >= *threshold,
            Requirement::LevelCount { threshold } => level >= *threshold,
            Requirement::TimeOfDay {
                before_hour,
                after_hour,
            } => logs.iter().any(|log| {
                self.hour_of(log)
                    .is_some_and(|hour| Requirement::hour_matches(*before_hour, *after_hour, hour))
            }),
            Requirement::DayOfWeek { days } => logs
                .iter()
                .any(|log| self.day_of(log).is_some_and(|day| days.contains(&day))),
        }
    }

    fn hour_of(&self, log: &LogRecord) -> Option<u32> {
        let raw = log.time.as_deref()?;
        let hour = log.local_hour(&self.offset);
        if hour.is_none() {
            tracing::debug!(log = %log.id, raw, "Ignoring log with malformed time");
        }
        hour
    }

    fn day_of(&self, log: &LogRecord) -> Option<DayOfWeek> {
        let raw = log.date.as_deref()?;
        let day = log.local_weekday(&self.offset).map(DayOfWeek::from);
        if day.is_none() {
            tracing::debug!(log = %log.id, raw, "Ignoring log with malformed date");
        }
        day
    }
}

/// Unlock count after a met requirement, and whether that awarded XP.
fn next_unlock_count(achievement: &AchievementDefinition, prior: u32) -> (u32, bool) {
    if prior == 0 {
        return (1, true);
    }

    match achievement.repeatable {
        Some(repeatable) => {
            let prior = repeatable.limit.map_or(prior, |limit| prior.min(limit));
            let next = if repeatable.allows(prior) {
                prior.saturating_add(1)
            } else {
                prior
            };
            (next, next > prior)
        }
        None => (1, false),
    }
}
