//! Log record persistence.
//!
//! All records live in one JSON array under [`keys::CLASS_LOGS`], newest
//! first.

use crate::logs::LogRecord;
use crate::storage::database::Database;
use crate::storage::error::{load_list, save_list, StoreError};
use crate::storage::schema::keys;

/// Log store for class/lesson sessions.
pub struct LogStore<'a> {
    db: &'a Database,
}

impl<'a> LogStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// All records, newest first.
    pub fn list(&self) -> Result<Vec<LogRecord>, StoreError> {
        load_list(self.db, keys::CLASS_LOGS)
    }

    /// Find a record by id.
    pub fn get(&self, id: &str) -> Result<Option<LogRecord>, StoreError> {
        Ok(self.list()?.into_iter().find(|log| log.id == id))
    }

    /// Create and store a new record.
    pub fn create(
        &self,
        class_id: &str,
        lesson_id: &str,
        date: Option<String>,
        time: Option<String>,
        note: Option<String>,
    ) -> Result<LogRecord, StoreError> {
        let mut record = LogRecord::new(class_id, lesson_id);
        record.date = date;
        record.time = time;
        if let Some(note) = note {
            record = record.with_note(note);
        }

        self.save(&record)?;
        Ok(record)
    }

    /// Store a record at the front of the history.
    pub fn save(&self, record: &LogRecord) -> Result<(), StoreError> {
        validate(record)?;

        let mut logs = self.list()?;
        if logs.iter().any(|log| log.id == record.id) {
            return Err(StoreError::Duplicate(format!("log {}", record.id)));
        }

        logs.insert(0, record.clone());
        save_list(self.db, keys::CLASS_LOGS, &logs)?;

        tracing::info!(id = %record.id, class_id = %record.class_id, "Saved log");
        Ok(())
    }

    /// Replace an existing record, keeping its position.
    pub fn update(&self, record: &LogRecord) -> Result<(), StoreError> {
        validate(record)?;

        let mut logs = self.list()?;
        let slot = logs
            .iter_mut()
            .find(|log| log.id == record.id)
            .ok_or_else(|| StoreError::NotFound(format!("log {}", record.id)))?;
        *slot = record.clone();
        save_list(self.db, keys::CLASS_LOGS, &logs)?;

        tracing::info!(id = %record.id, "Updated log");
        Ok(())
    }

    /// Delete a record. Returns whether anything was removed.
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut logs = self.list()?;
        let before = logs.len();
        logs.retain(|log| log.id != id);

        if logs.len() == before {
            return Ok(false);
        }

        save_list(self.db, keys::CLASS_LOGS, &logs)?;
        tracing::info!(id, "Deleted log");
        Ok(true)
    }

    /// Delete every record of a class. Returns how many were removed.
    pub fn delete_for_class(&self, class_id: &str) -> Result<usize, StoreError> {
        let mut logs = self.list()?;
        let before = logs.len();
        logs.retain(|log| log.class_id != class_id);

        let removed = before - logs.len();
        if removed > 0 {
            save_list(self.db, keys::CLASS_LOGS, &logs)?;
            tracing::info!(class_id, removed, "Deleted logs for class");
        }
        Ok(removed)
    }
}

fn validate(record: &LogRecord) -> Result<(), StoreError> {
    if record.class_id.trim().is_empty() {
        return Err(StoreError::Validation("log needs a class".to_string()));
    }
    if record.lesson_id.trim().is_empty() {
        return Err(StoreError::Validation("log needs a lesson".to_string()));
    }
    Ok(())
}
