//! Class and lesson catalog.
//!
//! Combines the fixed built-in catalog with user-created classes and lessons.

pub mod builtin;
pub mod merge;
pub mod types;

pub use builtin::{builtin_classes, is_builtin};
pub use merge::merge_classes;
pub use types::{
    ClassDefinition, LessonDefinition, MergedCatalog, StoredClass, StoredLesson, UNKNOWN_LABEL,
};
