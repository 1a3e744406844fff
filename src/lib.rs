//! ClassLog - Martial Arts Class Journal
//!
//! Records attended classes and lessons, derives levels and achievements from
//! the log history and summarises it for charts. Data is kept in a local
//! SQLite key-value store.

pub mod achievements;
pub mod catalog;
pub mod logs;
pub mod progression;
pub mod stats;
pub mod storage;

// Re-export commonly used types
pub use achievements::{AchievementCatalog, AchievementEvaluator, UnlockMap};
pub use catalog::MergedCatalog;
pub use logs::LogRecord;
pub use progression::{ProgressEngine, ProgressReport, XpRules};
pub use storage::config::AppConfig;
