//! Log record types and lenient timestamp parsing.
//!
//! Timestamps are kept as the raw strings the stores persist and parsed on
//! demand, so a single bad record never prevents the rest of the history from
//! loading.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single logged class + lesson session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    /// Unique identifier
    pub id: String,
    /// Class the session belongs to
    pub class_id: String,
    /// Lesson within the class
    pub lesson_id: String,
    /// Session date (RFC 3339 or ISO-8601 string)
    #[serde(default)]
    pub date: Option<String>,
    /// Session time of day (RFC 3339 or ISO-8601 string)
    #[serde(default)]
    pub time: Option<String>,
    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl LogRecord {
    /// Create a new record with a freshly generated id.
    pub fn new(class_id: &str, lesson_id: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            class_id: class_id.to_string(),
            lesson_id: lesson_id.to_string(),
            date: None,
            time: None,
            note: None,
        }
    }

    /// Set the session date.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the session time.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Attach a note. Blank notes are dropped.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = if note.trim().is_empty() { None } else { Some(note) };
        self
    }

    /// Local wall-clock value of the `date` field.
    pub fn local_date(&self, offset: &FixedOffset) -> Option<NaiveDateTime> {
        self.date.as_deref().and_then(|raw| parse_local(raw, offset))
    }

    /// Local wall-clock value of the `time` field.
    pub fn local_time(&self, offset: &FixedOffset) -> Option<NaiveDateTime> {
        self.time.as_deref().and_then(|raw| parse_local(raw, offset))
    }

    /// Local hour (0-23) the session happened at.
    pub fn local_hour(&self, offset: &FixedOffset) -> Option<u32> {
        self.local_time(offset).map(|t| t.hour())
    }

    /// Local weekday of the session date.
    pub fn local_weekday(&self, offset: &FixedOffset) -> Option<Weekday> {
        self.local_date(offset).map(|d| d.weekday())
    }
}

/// Parse a stored timestamp into local wall-clock time.
///
/// Accepts RFC 3339 (converted into `offset`), naive `YYYY-MM-DDTHH:MM:SS[.f]`
/// or `YYYY-MM-DD HH:MM:SS` (already local), and a bare `YYYY-MM-DD` (local
/// midnight). Returns `None` for anything else.
pub fn parse_local(raw: &str, offset: &FixedOffset) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(offset).naive_local());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
