//! Merging the built-in class catalog with user-created entries.
//!
//! A custom entry whose id matches a built-in class contributes only the
//! lessons the built-in does not already have. Any other custom entry becomes a
//! new custom class. Every call builds a fresh catalog; inputs are untouched.

use std::collections::HashSet;

use super::types::{ClassDefinition, LessonDefinition, MergedCatalog, StoredClass};

/// Merge built-in and custom classes into a single catalog.
pub fn merge_classes(builtin: &[StoredClass], custom: &[StoredClass]) -> MergedCatalog {
    let seeded = builtin.iter().fold(Vec::new(), |mut classes, stored| {
        fold_entry(&mut classes, stored, false);
        classes
    });

    let merged = custom.iter().fold(seeded, |mut classes, stored| {
        fold_entry(&mut classes, stored, true);
        classes
    });

    MergedCatalog::new(merged)
}

fn fold_entry(classes: &mut Vec<ClassDefinition>, stored: &StoredClass, custom: bool) {
    match classes.iter().position(|c| c.id == stored.id) {
        Some(position) => {
            let existing = &mut classes[position];
            let mut seen: HashSet<String> = existing.lessons.iter().map(|l| l.id.clone()).collect();
            for lesson in &stored.lessons {
                if seen.insert(lesson.id.clone()) {
                    existing.lessons.push(LessonDefinition {
                        id: lesson.id.clone(),
                        name: lesson.name.clone(),
                        is_custom: custom,
                    });
                }
            }
        }
        None => {
            let mut seen = HashSet::new();
            let lessons = stored
                .lessons
                .iter()
                .filter(|l| seen.insert(l.id.as_str()))
                .map(|l| LessonDefinition {
                    id: l.id.clone(),
                    name: l.name.clone(),
                    is_custom: custom,
                })
                .collect();

            classes.push(ClassDefinition {
                id: stored.id.clone(),
                name: stored.name.clone(),
                lessons,
                is_custom: custom,
            });
        }
    }
}
