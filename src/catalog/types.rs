//! Class and lesson definitions.
//!
//! `StoredClass` is the persisted shape (`{id, class, data: [{id, name}]}`);
//! `ClassDefinition` is the merged in-memory view that also knows which
//! entries were user-created.

use serde::{Deserialize, Serialize};

/// Label used when a class or lesson id cannot be resolved.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Persisted lesson entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredLesson {
    pub id: String,
    pub name: String,
}

/// Persisted class entry, built-in or custom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredClass {
    pub id: String,
    /// Display name
    #[serde(rename = "class")]
    pub name: String,
    /// Lessons belonging to the class
    #[serde(rename = "data", default)]
    pub lessons: Vec<StoredLesson>,
}

impl StoredClass {
    /// Find a lesson by id.
    pub fn lesson(&self, lesson_id: &str) -> Option<&StoredLesson> {
        self.lessons.iter().find(|l| l.id == lesson_id)
    }

    /// Mutable lesson lookup.
    pub fn lesson_mut(&mut self, lesson_id: &str) -> Option<&mut StoredLesson> {
        self.lessons.iter_mut().find(|l| l.id == lesson_id)
    }
}

/// Lesson in the merged catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonDefinition {
    pub id: String,
    pub name: String,
    /// Added by the user rather than shipped with the app
    pub is_custom: bool,
}

/// Class in the merged catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDefinition {
    pub id: String,
    pub name: String,
    pub lessons: Vec<LessonDefinition>,
    /// Created by the user rather than shipped with the app
    pub is_custom: bool,
}

impl ClassDefinition {
    /// Find a lesson by id.
    pub fn lesson(&self, lesson_id: &str) -> Option<&LessonDefinition> {
        self.lessons.iter().find(|l| l.id == lesson_id)
    }

    /// Number of user-created lessons in this class.
    pub fn custom_lesson_count(&self) -> usize {
        self.lessons.iter().filter(|l| l.is_custom).count()
    }
}

/// Built-in and custom classes merged into one lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedCatalog {
    classes: Vec<ClassDefinition>,
}

impl MergedCatalog {
    pub fn new(classes: Vec<ClassDefinition>) -> Self {
        Self { classes }
    }

    /// All classes, built-ins first.
    pub fn classes(&self) -> &[ClassDefinition] {
        &self.classes
    }

    /// Find a class by id.
    pub fn class(&self, class_id: &str) -> Option<&ClassDefinition> {
        self.classes.iter().find(|c| c.id == class_id)
    }

    /// Class display name, or `Unknown`.
    pub fn class_name(&self, class_id: &str) -> &str {
        self.class(class_id)
            .map(|c| c.name.as_str())
            .unwrap_or(UNKNOWN_LABEL)
    }

    /// Lesson display name, or `Unknown`.
    pub fn lesson_name(&self, class_id: &str, lesson_id: &str) -> &str {
        self.class(class_id)
            .and_then(|c| c.lesson(lesson_id))
            .map(|l| l.name.as_str())
            .unwrap_or(UNKNOWN_LABEL)
    }

    /// Whether a class name is already taken (case-insensitive).
    pub fn has_class_named(&self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        self.classes.iter().any(|c| c.name.to_lowercase() == needle)
    }

    /// Whether a lesson name is already taken within a class (case-insensitive).
    pub fn has_lesson_named(&self, class_id: &str, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        self.class(class_id)
            .map(|c| c.lessons.iter().any(|l| l.name.to_lowercase() == needle))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
