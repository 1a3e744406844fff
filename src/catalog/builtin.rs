//! Built-in class catalog shipped with the application.

use super::types::StoredClass;

const BUILTIN_CLASSES: &str = include_str!("../../data/classes.json");

/// Load the built-in classes embedded at compile time.
pub fn builtin_classes() -> Result<Vec<StoredClass>, serde_json::Error> {
    serde_json::from_str(BUILTIN_CLASSES)
}

/// Whether `class_id` belongs to the built-in catalog.
pub fn is_builtin(builtin: &[StoredClass], class_id: &str) -> bool {
    builtin.iter().any(|c| c.id == class_id)
}
