//! Unit tests for chart distributions and log rows.

use chrono::FixedOffset;
use classlog::catalog::{builtin_classes, merge_classes, StoredClass, StoredLesson};
use classlog::stats::{
    class_distribution, describe_log, lesson_distribution, time_distribution,
    weekday_distribution, CHART_COLORS,
};
use classlog::LogRecord;

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

fn history() -> Vec<LogRecord> {
    vec![
        LogRecord::new("gracie-combatives", "gc-01")
            .with_date("2024-05-04T07:40:00Z")
            .with_time("2024-05-04T07:40:00Z"),
        LogRecord::new("gracie-combatives", "gc-02")
            .with_date("2024-05-05T07:31:00Z")
            .with_time("2024-05-05T07:31:00Z"),
        LogRecord::new("deleted-class", "gone")
            .with_date("2024-05-06T19:05:00Z")
            .with_time("2024-05-06T19:05:00Z"),
        LogRecord::new("gracie-combatives", "gc-01")
            .with_date("garbage")
            .with_time("garbage"),
    ]
}

#[test]
fn test_class_distribution_with_unknown() {
    let catalog = merge_classes(&builtin_classes().unwrap(), &[]);
    let slices = class_distribution(&history(), &catalog);

    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].label, "Gracie Combatives");
    assert_eq!(slices[0].count, 3);
    assert_eq!(slices[0].color, CHART_COLORS[0]);
    assert_eq!(slices[1].label, "Unknown");
    assert_eq!(slices[1].color, CHART_COLORS[1]);
}

#[test]
fn test_lesson_distribution_includes_custom_lessons() {
    let custom = vec![StoredClass {
        id: "deleted-class".to_string(),
        name: "Judo".to_string(),
        lessons: vec![StoredLesson {
            id: "gone".to_string(),
            name: "Throws".to_string(),
        }],
    }];
    let catalog = merge_classes(&builtin_classes().unwrap(), &custom);
    let slices = lesson_distribution(&history(), &catalog);

    let counts: Vec<(&str, usize)> = slices.iter().map(|s| (s.label.as_str(), s.count)).collect();
    assert_eq!(counts.len(), 3);
    assert_eq!(counts[0].1, 2);
    assert_eq!(counts[2], ("Throws", 1));
}

#[test]
fn test_time_distribution_quarter_hours() {
    let slices = time_distribution(&history(), &utc());
    let labels: Vec<&str> = slices.iter().map(|s| s.label.as_str()).collect();

    assert_eq!(labels, vec!["7:30 AM", "7:00 PM"]);
    assert_eq!(slices[0].count, 2);
}

#[test]
fn test_weekday_distribution() {
    let slices = weekday_distribution(&history(), &utc());
    let labels: Vec<&str> = slices.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Saturday", "Sunday", "Monday"]);
}

#[test]
fn test_describe_log_formats() {
    let catalog = merge_classes(&builtin_classes().unwrap(), &[]);
    let logs = history();

    let row = describe_log(&logs[0], &catalog, &utc());
    assert_eq!(row.class_name, "Gracie Combatives");
    assert_eq!(row.weekday, "Saturday");
    assert_eq!(row.date, "May 4, 2024");
    assert_eq!(row.time, "7:40 AM");

    let broken = describe_log(&logs[3], &catalog, &utc());
    assert_eq!(broken.date, "Invalid Date");
    assert_eq!(broken.weekday, "Invalid Date");
    assert_eq!(broken.time, "Invalid Time");

    let orphan = describe_log(&logs[2], &catalog, &utc());
    assert_eq!(orphan.class_name, "Unknown");
    assert_eq!(orphan.lesson_name, "Unknown");
}
