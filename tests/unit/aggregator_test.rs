//! Unit tests for log aggregation.

use classlog::catalog::{merge_classes, StoredClass, StoredLesson};
use classlog::progression::aggregate;
use classlog::LogRecord;

fn stored(id: &str, lessons: &[&str]) -> StoredClass {
    StoredClass {
        id: id.to_string(),
        name: id.to_uppercase(),
        lessons: lessons
            .iter()
            .map(|l| StoredLesson {
                id: l.to_string(),
                name: l.to_uppercase(),
            })
            .collect(),
    }
}

#[test]
fn test_empty_inputs() {
    let counts = aggregate(&[], &[]);
    assert_eq!(counts.unique_classes_logged, 0);
    assert_eq!(counts.total_logs, 0);
    assert_eq!(counts.custom_class_count, 0);
    assert_eq!(counts.custom_lesson_count, 0);
}

#[test]
fn test_unique_classes_counted_once() {
    let logs = vec![
        LogRecord::new("a", "x"),
        LogRecord::new("a", "y"),
        LogRecord::new("b", "x"),
    ];
    let counts = aggregate(&logs, &[]);
    assert_eq!(counts.unique_classes_logged, 2);
    assert_eq!(counts.total_logs, 3);
}

#[test]
fn test_custom_counts_from_merged_catalog() {
    let builtin = vec![stored("gracie-combatives", &["gc-01", "gc-02"])];
    let custom = vec![
        // overlay: one new lesson on a built-in class
        stored("gracie-combatives", &["gc-01", "extra"]),
        stored("judo", &["throws", "pins"]),
        stored("wrestling", &[]),
    ];
    let catalog = merge_classes(&builtin, &custom);

    let counts = aggregate(&[], catalog.classes());
    assert_eq!(counts.custom_class_count, 2);
    assert_eq!(counts.custom_lesson_count, 3);
}
