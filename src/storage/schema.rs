//! Database schema definitions.
//!
//! Application data is kept as JSON blobs under string keys, mirroring the
//! key-value layout the mobile app persisted.

/// SQL schema for creating all database tables.
pub const SCHEMA: &str = r#"
-- Key-value blobs
CREATE TABLE IF NOT EXISTS key_value (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

/// Schema version tracking table
pub const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
);
"#;

/// Current schema version
pub const CURRENT_VERSION: i32 = 1;

/// Storage keys for the persisted blobs.
pub mod keys {
    /// Log records, newest first
    pub const CLASS_LOGS: &str = "classLogs";
    /// User-created classes and lessons
    pub const CUSTOM_CLASSES: &str = "customClasses";
    /// Achievement unlock counts from the last evaluation
    pub const ACHIEVEMENT_UNLOCKS: &str = "achievementUnlocks";
}
