//! Achievement catalog and evaluation.

pub mod definitions;
pub mod evaluator;

use std::collections::HashSet;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use definitions::{builtin_catalog, load_catalog};
pub use evaluator::{AchievementEvaluator, Evaluation, UnlockMap};

/// Achievement identifier as it appears in the catalog file.
pub type AchievementId = u32;

/// Day names used by day-of-week requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
        }
    }
}

/// What has to be true for an achievement to unlock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Requirement {
    /// Custom classes created >= threshold
    ClassCount { threshold: usize },
    /// Custom lessons created >= threshold
    LessonCount { threshold: usize },
    /// Total log records >= threshold
    LogCount { threshold: usize },
    /// Current level >= threshold
    LevelCount { threshold: u32 },
    /// Some log's local hour is strictly before / after the bound
    TimeOfDay {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        before_hour: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        after_hour: Option<u32>,
    },
    /// Some log falls on one of the listed days
    DayOfWeek { days: Vec<DayOfWeek> },
}

impl Requirement {
    /// Whether a log at `hour` satisfies a time-of-day window.
    ///
    /// With both bounds and `after < before` the window is the span between
    /// them; otherwise either bound is enough (an overnight window).
    pub fn hour_matches(before_hour: Option<u32>, after_hour: Option<u32>, hour: u32) -> bool {
        match (before_hour, after_hour) {
            (Some(before), Some(after)) if after < before => hour > after && hour < before,
            (Some(before), Some(after)) => hour < before || hour > after,
            (Some(before), None) => hour < before,
            (None, Some(after)) => hour > after,
            (None, None) => false,
        }
    }
}

/// Repeat policy for achievements that can unlock more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repeatable {
    /// Maximum unlock count; unlimited when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl Repeatable {
    /// Whether another unlock is allowed after `times` unlocks.
    pub fn allows(&self, times: u32) -> bool {
        self.limit.map_or(true, |limit| times < limit)
    }
}

/// Static achievement definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementDefinition {
    pub id: AchievementId,
    pub title: String,
    pub description: String,
    /// XP awarded per unlock
    #[serde(rename = "xpValue", alias = "xp")]
    pub xp: u64,
    pub requirement: Requirement,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeatable: Option<Repeatable>,
}

impl AchievementDefinition {
    pub fn new(id: AchievementId, title: &str, requirement: Requirement, xp: u64) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: String::new(),
            xp,
            requirement,
            repeatable: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Make the achievement repeatable, optionally capped.
    pub fn repeatable(mut self, limit: Option<u32>) -> Self {
        self.repeatable = Some(Repeatable { limit });
        self
    }
}

/// Unlock count for one achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementUnlock {
    pub achievement_id: AchievementId,
    pub times_unlocked: u32,
}

/// Versioned, validated list of achievement definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementCatalog {
    pub version: u32,
    achievements: Vec<AchievementDefinition>,
}

impl AchievementCatalog {
    /// Build and validate a catalog.
    pub fn new(
        version: u32,
        achievements: Vec<AchievementDefinition>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            version,
            achievements,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate a catalog from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();

        for achievement in &self.achievements {
            if !seen.insert(achievement.id) {
                return Err(CatalogError::DuplicateId(achievement.id));
            }

            if let Some(Repeatable { limit: Some(0) }) = achievement.repeatable {
                return Err(CatalogError::Invalid(
                    achievement.id,
                    "repeat limit must be at least 1".to_string(),
                ));
            }

            match &achievement.requirement {
                Requirement::TimeOfDay {
                    before_hour: None,
                    after_hour: None,
                } => {
                    return Err(CatalogError::Invalid(
                        achievement.id,
                        "time-of-day requirement needs a bound".to_string(),
                    ));
                }
                Requirement::TimeOfDay {
                    before_hour,
                    after_hour,
                } => {
                    if [*before_hour, *after_hour].into_iter().flatten().any(|h| h > 24) {
                        return Err(CatalogError::Invalid(
                            achievement.id,
                            "hour bounds must be within 0..=24".to_string(),
                        ));
                    }
                }
                Requirement::DayOfWeek { days } if days.is_empty() => {
                    return Err(CatalogError::Invalid(
                        achievement.id,
                        "day-of-week requirement needs at least one day".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// All definitions in catalog order.
    pub fn achievements(&self) -> &[AchievementDefinition] {
        &self.achievements
    }

    /// Find a definition by id.
    pub fn get(&self, id: AchievementId) -> Option<&AchievementDefinition> {
        self.achievements.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.achievements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.achievements.is_empty()
    }
}

/// Achievement catalog errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate achievement id: {0}")]
    DuplicateId(AchievementId),

    #[error("Invalid achievement {0}: {1}")]
    Invalid(AchievementId, String),
}
