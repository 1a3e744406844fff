//! Unit tests for achievement evaluation against the shipped catalog.

use chrono::FixedOffset;
use classlog::achievements::{
    builtin_catalog, AchievementCatalog, AchievementDefinition, AchievementEvaluator, Requirement,
    UnlockMap,
};
use classlog::progression::Counts;
use classlog::LogRecord;

const CLASS_CREATOR: u32 = 1;
const FIRST_STEP: u32 = 7;
const EARLY_BIRD: u32 = 19;
const NIGHT_OWL: u32 = 20;
const WEEKEND_WARRIOR: u32 = 21;

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

fn log_at(stamp: &str) -> LogRecord {
    LogRecord::new("gracie-combatives", "gc-01")
        .with_date(stamp)
        .with_time(stamp)
}

fn counts_for(logs: &[LogRecord]) -> Counts {
    Counts {
        unique_classes_logged: 1,
        total_logs: logs.len(),
        ..Default::default()
    }
}

// =============================================================================
// Once-only achievements
// =============================================================================

#[test]
fn test_class_creator_unlocks_once_over_five_evaluations() {
    let catalog = builtin_catalog().unwrap();
    let evaluator = AchievementEvaluator::new(&catalog, utc());
    let counts = Counts {
        custom_class_count: 1,
        ..Default::default()
    };

    let mut previous = UnlockMap::new();
    let mut total_gained = 0;
    for _ in 0..5 {
        let evaluation = evaluator.evaluate(&counts, &[], 1, &previous);
        assert_eq!(evaluation.times_unlocked(CLASS_CREATOR), 1);
        total_gained += evaluation.xp_gained;
        previous = evaluation.unlocks;
    }

    assert_eq!(total_gained, 20);
}

#[test]
fn test_non_repeatables_are_idempotent() {
    let catalog = builtin_catalog().unwrap();
    let evaluator = AchievementEvaluator::new(&catalog, utc());
    let counts = Counts {
        unique_classes_logged: 3,
        total_logs: 12,
        custom_class_count: 5,
        custom_lesson_count: 10,
    };

    let first = evaluator.evaluate(&counts, &[], 10, &UnlockMap::new());
    let second = evaluator.evaluate(&counts, &[], 10, &first.unlocks);

    assert_eq!(first.unlocks, second.unlocks);
    assert_eq!(second.xp_gained, 0);
    // Class Creator, Class Enthusiast, Lesson Learner, Lesson Lover,
    // First Step, Consistent Learner, Level Up!, Double Digits
    assert_eq!(first.unlocks.len(), 8);
    assert_eq!(first.xp_gained, 20 + 50 + 10 + 50 + 10 + 50 + 50 + 100);
}

#[test]
fn test_unmet_achievement_absent() {
    let catalog = builtin_catalog().unwrap();
    let evaluator = AchievementEvaluator::new(&catalog, utc());

    let previous = UnlockMap::from([(CLASS_CREATOR, 1)]);
    let evaluation = evaluator.evaluate(&Counts::default(), &[], 1, &previous);
    assert!(!evaluation.is_unlocked(CLASS_CREATOR));
    assert!(evaluation.unlocks.is_empty());
}

// =============================================================================
// Repeatable time and day achievements
// =============================================================================

#[test]
fn test_early_bird_reunlocks_until_limit() {
    let catalog = builtin_catalog().unwrap();
    let evaluator = AchievementEvaluator::new(&catalog, utc());
    // Wednesday, 07:00
    let logs = vec![log_at("2024-05-08T07:00:00Z")];
    let counts = counts_for(&logs);

    let mut previous = UnlockMap::new();
    for round in 1..=12u32 {
        let evaluation = evaluator.evaluate(&counts, &logs, 1, &previous);
        assert_eq!(evaluation.times_unlocked(EARLY_BIRD), round.min(10));
        assert_eq!(evaluation.times_unlocked(FIRST_STEP), 1);
        assert!(!evaluation.is_unlocked(WEEKEND_WARRIOR));

        let expected = match round {
            1 => 10 + 15,
            2..=10 => 15,
            _ => 0,
        };
        assert_eq!(evaluation.xp_gained, expected, "round {round}");
        previous = evaluation.unlocks;
    }
}

#[test]
fn test_time_of_day_bounds_are_strict() {
    let catalog = builtin_catalog().unwrap();
    let evaluator = AchievementEvaluator::new(&catalog, utc());

    let cases = [
        ("2024-05-08T07:59:00Z", true, false),
        ("2024-05-08T08:00:00Z", false, false),
        ("2024-05-08T20:59:00Z", false, false),
        ("2024-05-08T21:00:00Z", false, true),
    ];
    for (stamp, early, night) in cases {
        let logs = vec![log_at(stamp)];
        let evaluation = evaluator.evaluate(&counts_for(&logs), &logs, 1, &UnlockMap::new());
        assert_eq!(evaluation.is_unlocked(EARLY_BIRD), early, "{stamp}");
        assert_eq!(evaluation.is_unlocked(NIGHT_OWL), night, "{stamp}");
    }
}

#[test]
fn test_weekend_warrior_uses_local_date() {
    let catalog = builtin_catalog().unwrap();

    // Friday 23:30 UTC is Saturday in UTC+2
    let logs = vec![log_at("2024-05-03T23:30:00Z")];
    let counts = counts_for(&logs);

    let at_utc = AchievementEvaluator::new(&catalog, utc()).evaluate(&counts, &logs, 1, &UnlockMap::new());
    assert!(!at_utc.is_unlocked(WEEKEND_WARRIOR));

    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
    let local = AchievementEvaluator::new(&catalog, plus_two).evaluate(&counts, &logs, 1, &UnlockMap::new());
    assert!(local.is_unlocked(WEEKEND_WARRIOR));
}

#[test]
fn test_malformed_timestamps_never_match() {
    let catalog = builtin_catalog().unwrap();
    let evaluator = AchievementEvaluator::new(&catalog, utc());
    let logs = vec![LogRecord::new("c", "l").with_date("not a date").with_time("7am")];

    let evaluation = evaluator.evaluate(&counts_for(&logs), &logs, 1, &UnlockMap::new());
    assert!(!evaluation.is_unlocked(EARLY_BIRD));
    assert!(!evaluation.is_unlocked(WEEKEND_WARRIOR));
    assert!(evaluation.is_unlocked(FIRST_STEP));
}

// =============================================================================
// Repeat limits
// =============================================================================

#[test]
fn test_repeat_limit_never_exceeded() {
    let catalog = AchievementCatalog::new(
        1,
        vec![AchievementDefinition::new(1, "Regular", Requirement::LogCount { threshold: 1 }, 5)
            .repeatable(Some(3))],
    )
    .unwrap();
    let evaluator = AchievementEvaluator::new(&catalog, utc());
    let logs = vec![LogRecord::new("c", "l")];
    let counts = counts_for(&logs);

    let mut previous = UnlockMap::new();
    let mut gained = 0;
    for _ in 0..10 {
        let evaluation = evaluator.evaluate(&counts, &logs, 1, &previous);
        assert!(evaluation.times_unlocked(1) <= 3);
        gained += evaluation.xp_gained;
        previous = evaluation.unlocks;
    }
    assert_eq!(previous[&1], 3);
    assert_eq!(gained, 15);

    // A stored count above the limit is clamped without awarding XP
    let evaluation = evaluator.evaluate(&counts, &logs, 1, &UnlockMap::from([(1, 9)]));
    assert_eq!(evaluation.times_unlocked(1), 3);
    assert_eq!(evaluation.xp_gained, 0);
}
