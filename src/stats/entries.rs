//! Display rows for the log list.

use chrono::FixedOffset;
use serde::Serialize;

use super::distribution::format_clock;
use crate::catalog::MergedCatalog;
use crate::logs::LogRecord;

const INVALID_DATE: &str = "Invalid Date";
const INVALID_TIME: &str = "Invalid Time";

/// A log record resolved against the catalog and formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntryView {
    pub id: String,
    pub class_name: String,
    pub lesson_name: String,
    /// e.g. `Saturday`
    pub weekday: String,
    /// e.g. `May 4, 2024`
    pub date: String,
    /// e.g. `7:30 AM`
    pub time: String,
    pub note: Option<String>,
}

/// Resolve names and format the timestamps of a log record.
pub fn describe_log(log: &LogRecord, catalog: &MergedCatalog, offset: &FixedOffset) -> LogEntryView {
    let date = log.local_date(offset);
    let time = log.local_time(offset);

    LogEntryView {
        id: log.id.clone(),
        class_name: catalog.class_name(&log.class_id).to_string(),
        lesson_name: catalog.lesson_name(&log.class_id, &log.lesson_id).to_string(),
        weekday: date
            .map(|d| d.format("%A").to_string())
            .unwrap_or_else(|| INVALID_DATE.to_string()),
        date: date
            .map(|d| d.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| INVALID_DATE.to_string()),
        time: time
            .map(|t| format_clock(&t))
            .unwrap_or_else(|| INVALID_TIME.to_string()),
        note: log.note.clone(),
    }
}

/// Describe every log, keeping the input order.
pub fn describe_logs(
    logs: &[LogRecord],
    catalog: &MergedCatalog,
    offset: &FixedOffset,
) -> Vec<LogEntryView> {
    logs.iter().map(|log| describe_log(log, catalog, offset)).collect()
}
