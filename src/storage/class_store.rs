//! Custom class and lesson persistence.
//!
//! User-created classes, and user-created lessons on built-in classes, live in
//! one JSON array under [`keys::CUSTOM_CLASSES`]. A lesson added to a built-in
//! class is stored in an overlay entry that carries the built-in class id.
//! Built-in classes and lessons are read-only.

use uuid::Uuid;

use crate::catalog::{is_builtin, merge_classes, MergedCatalog, StoredClass, StoredLesson};
use crate::storage::database::Database;
use crate::storage::error::{clean_name, load_list, save_list, StoreError};
use crate::storage::schema::keys;

/// Store for user-created classes and lessons.
pub struct ClassStore<'a> {
    db: &'a Database,
    builtin: Vec<StoredClass>,
}

impl<'a> ClassStore<'a> {
    pub fn new(db: &'a Database, builtin: Vec<StoredClass>) -> Self {
        Self { db, builtin }
    }

    /// Stored custom entries, including overlays on built-in classes.
    pub fn list_custom(&self) -> Result<Vec<StoredClass>, StoreError> {
        load_list(self.db, keys::CUSTOM_CLASSES)
    }

    /// Built-in and custom classes merged.
    pub fn merged(&self) -> Result<MergedCatalog, StoreError> {
        Ok(merge_classes(&self.builtin, &self.list_custom()?))
    }

    /// Create a new custom class with no lessons.
    pub fn add_class(&self, name: &str) -> Result<StoredClass, StoreError> {
        let name = clean_name(name, "Class")?;
        let merged = self.merged()?;
        if merged.has_class_named(&name) {
            return Err(StoreError::Duplicate(format!("class named {name}")));
        }

        let class = StoredClass {
            id: Uuid::new_v4().to_string(),
            name,
            lessons: Vec::new(),
        };

        let mut custom = self.list_custom()?;
        custom.push(class.clone());
        save_list(self.db, keys::CUSTOM_CLASSES, &custom)?;

        tracing::info!(id = %class.id, name = %class.name, "Added class");
        Ok(class)
    }

    /// Add a lesson to any class, built-in or custom.
    pub fn add_lesson(&self, class_id: &str, name: &str) -> Result<StoredLesson, StoreError> {
        let name = clean_name(name, "Lesson")?;
        let merged = self.merged()?;
        let class = merged
            .class(class_id)
            .ok_or_else(|| StoreError::NotFound(format!("class {class_id}")))?;
        if merged.has_lesson_named(class_id, &name) {
            return Err(StoreError::Duplicate(format!(
                "lesson named {name} in {}",
                class.name
            )));
        }

        let lesson = StoredLesson {
            id: Uuid::new_v4().to_string(),
            name,
        };

        let mut custom = self.list_custom()?;
        match custom.iter_mut().find(|c| c.id == class_id) {
            Some(entry) => entry.lessons.push(lesson.clone()),
            None => custom.push(StoredClass {
                id: class_id.to_string(),
                name: class.name.clone(),
                lessons: vec![lesson.clone()],
            }),
        }
        save_list(self.db, keys::CUSTOM_CLASSES, &custom)?;

        tracing::info!(class_id, lesson_id = %lesson.id, "Added lesson");
        Ok(lesson)
    }

    /// Rename a custom class.
    pub fn edit_class(&self, class_id: &str, name: &str) -> Result<(), StoreError> {
        self.ensure_not_builtin_class(class_id)?;
        let name = clean_name(name, "Class")?;

        let merged = self.merged()?;
        let needle = name.to_lowercase();
        if merged
            .classes()
            .iter()
            .any(|c| c.id != class_id && c.name.to_lowercase() == needle)
        {
            return Err(StoreError::Duplicate(format!("class named {name}")));
        }

        let mut custom = self.list_custom()?;
        let entry = custom
            .iter_mut()
            .find(|c| c.id == class_id)
            .ok_or_else(|| StoreError::NotFound(format!("class {class_id}")))?;
        entry.name = name;
        save_list(self.db, keys::CUSTOM_CLASSES, &custom)?;

        tracing::info!(class_id, "Renamed class");
        Ok(())
    }

    /// Rename a custom lesson.
    pub fn edit_lesson(&self, class_id: &str, lesson_id: &str, name: &str) -> Result<(), StoreError> {
        self.ensure_not_builtin_lesson(class_id, lesson_id)?;
        let name = clean_name(name, "Lesson")?;

        let merged = self.merged()?;
        let needle = name.to_lowercase();
        let taken = merged
            .class(class_id)
            .map(|c| {
                c.lessons
                    .iter()
                    .any(|l| l.id != lesson_id && l.name.to_lowercase() == needle)
            })
            .unwrap_or(false);
        if taken {
            return Err(StoreError::Duplicate(format!("lesson named {name}")));
        }

        let mut custom = self.list_custom()?;
        let lesson = custom
            .iter_mut()
            .find(|c| c.id == class_id)
            .and_then(|c| c.lesson_mut(lesson_id))
            .ok_or_else(|| StoreError::NotFound(format!("lesson {lesson_id}")))?;
        lesson.name = name;
        save_list(self.db, keys::CUSTOM_CLASSES, &custom)?;

        tracing::info!(class_id, lesson_id, "Renamed lesson");
        Ok(())
    }

    /// Delete a custom class and its lessons. Returns whether anything was
    /// removed.
    pub fn delete_class(&self, class_id: &str) -> Result<bool, StoreError> {
        self.ensure_not_builtin_class(class_id)?;

        let mut custom = self.list_custom()?;
        let before = custom.len();
        custom.retain(|c| c.id != class_id);
        if custom.len() == before {
            return Ok(false);
        }

        save_list(self.db, keys::CUSTOM_CLASSES, &custom)?;
        tracing::info!(class_id, "Deleted class");
        Ok(true)
    }

    /// Delete a custom lesson. An overlay left without lessons is dropped.
    pub fn delete_lesson(&self, class_id: &str, lesson_id: &str) -> Result<bool, StoreError> {
        self.ensure_not_builtin_lesson(class_id, lesson_id)?;

        let mut custom = self.list_custom()?;
        let Some(position) = custom.iter().position(|c| c.id == class_id) else {
            return Ok(false);
        };

        let entry = &mut custom[position];
        let before = entry.lessons.len();
        entry.lessons.retain(|l| l.id != lesson_id);
        if entry.lessons.len() == before {
            return Ok(false);
        }

        if entry.lessons.is_empty() && is_builtin(&self.builtin, class_id) {
            custom.remove(position);
        }

        save_list(self.db, keys::CUSTOM_CLASSES, &custom)?;
        tracing::info!(class_id, lesson_id, "Deleted lesson");
        Ok(true)
    }

    fn ensure_not_builtin_class(&self, class_id: &str) -> Result<(), StoreError> {
        if is_builtin(&self.builtin, class_id) {
            return Err(StoreError::Validation(format!(
                "built-in class {class_id} cannot be changed"
            )));
        }
        Ok(())
    }

    fn ensure_not_builtin_lesson(&self, class_id: &str, lesson_id: &str) -> Result<(), StoreError> {
        let builtin_lesson = self
            .builtin
            .iter()
            .find(|c| c.id == class_id)
            .and_then(|c| c.lesson(lesson_id))
            .is_some();
        if builtin_lesson {
            return Err(StoreError::Validation(format!(
                "built-in lesson {lesson_id} cannot be changed"
            )));
        }
        Ok(())
    }
}
