//! Store errors and blob helpers shared by the stores.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::database::{Database, DatabaseError};

/// Errors raised by the log and class stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    Duplicate(String),
}

/// Load a JSON array stored under `key`.
///
/// Missing keys give an empty list; so do blobs that fail to parse, which are
/// reported as a warning and left in place.
pub(crate) fn load_list<T: DeserializeOwned>(db: &Database, key: &str) -> Result<Vec<T>, StoreError> {
    let Some(raw) = db.get_item(key)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str::<Option<Vec<T>>>(&raw) {
        Ok(items) => Ok(items.unwrap_or_default()),
        Err(e) => {
            tracing::warn!(key, error = %e, "Stored data is corrupt, treating as empty");
            Ok(Vec::new())
        }
    }
}

/// Serialize `items` as a JSON array under `key`.
pub(crate) fn save_list<T: Serialize>(db: &Database, key: &str, items: &[T]) -> Result<(), StoreError> {
    let json = serde_json::to_string(items)?;
    db.set_item(key, &json)?;
    Ok(())
}

/// Trim a user-supplied name and reject blanks.
pub(crate) fn clean_name(name: &str, what: &str) -> Result<String, StoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StoreError::Validation(format!("{what} name cannot be empty")));
    }
    Ok(trimmed.to_string())
}
