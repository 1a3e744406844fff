//! Shared state for commands: configuration, database and catalogs.

use anyhow::{Context as _, Result};
use chrono::FixedOffset;
use std::path::Path;

use classlog::achievements::{load_catalog, AchievementCatalog};
use classlog::catalog::{builtin_classes, StoredClass};
use classlog::storage::{load_config, AppConfig, ClassStore, Database, LogStore, UnlockStore};

pub struct Context {
    pub config: AppConfig,
    pub db: Database,
    pub builtin: Vec<StoredClass>,
    pub achievements: AchievementCatalog,
    pub offset: FixedOffset,
}

impl Context {
    pub fn open(config_path: Option<&Path>, db_path: Option<&Path>) -> Result<Self> {
        let config = load_config(config_path).context("Failed to load configuration")?;

        let db_path = db_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config.database_path());
        let db = Database::open(&db_path)
            .with_context(|| format!("Failed to open database at {}", db_path.display()))?;

        let builtin = builtin_classes().context("Built-in class catalog is invalid")?;
        let achievements = load_catalog(config.progression.achievements_file.as_deref())
            .context("Failed to load achievement catalog")?;
        let offset = config.time.offset();

        tracing::debug!(
            db = %db_path.display(),
            achievements = achievements.len(),
            offset = %offset,
            "Opened ClassLog data"
        );

        Ok(Self {
            config,
            db,
            builtin,
            achievements,
            offset,
        })
    }

    pub fn logs(&self) -> LogStore<'_> {
        LogStore::new(&self.db)
    }

    pub fn classes(&self) -> ClassStore<'_> {
        ClassStore::new(&self.db, self.builtin.clone())
    }

    pub fn unlocks(&self) -> UnlockStore<'_> {
        UnlockStore::new(&self.db)
    }
}
