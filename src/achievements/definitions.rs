//! Achievement definitions.
//!
//! The shipped catalog is embedded at compile time; a replacement file can be
//! supplied through configuration.

use std::path::Path;

use super::{AchievementCatalog, CatalogError};

const BUILTIN_ACHIEVEMENTS: &str = include_str!("../../data/achievements.json");

/// The catalog shipped with the application.
pub fn builtin_catalog() -> Result<AchievementCatalog, CatalogError> {
    AchievementCatalog::from_json(BUILTIN_ACHIEVEMENTS)
}

/// Load the catalog from `path`, or fall back to the built-in one.
pub fn load_catalog(path: Option<&Path>) -> Result<AchievementCatalog, CatalogError> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            let catalog = AchievementCatalog::from_json(&content)?;
            tracing::info!(
                "Loaded achievement catalog v{} ({} achievements) from {}",
                catalog.version,
                catalog.len(),
                path.display()
            );
            Ok(catalog)
        }
        None => builtin_catalog(),
    }
}
