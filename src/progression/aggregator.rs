//! Reduces raw logs and the merged catalog to scalar counts.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::ClassDefinition;
use crate::logs::LogRecord;

/// Aggregated counts derived from the log history and class catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Counts {
    /// Distinct class ids present in the log history
    pub unique_classes_logged: usize,
    /// Number of log records
    pub total_logs: usize,
    /// User-created classes
    pub custom_class_count: usize,
    /// User-created lessons across all classes
    pub custom_lesson_count: usize,
}

/// Aggregate logs and classes into [`Counts`].
pub fn aggregate(logs: &[LogRecord], classes: &[ClassDefinition]) -> Counts {
    let unique_classes_logged = logs
        .iter()
        .map(|log| log.class_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    Counts {
        unique_classes_logged,
        total_logs: logs.len(),
        custom_class_count: classes.iter().filter(|c| c.is_custom).count(),
        custom_lesson_count: classes.iter().map(ClassDefinition::custom_lesson_count).sum(),
    }
}
