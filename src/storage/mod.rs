//! Storage module for database, stores and configuration.

pub mod class_store;
pub mod config;
pub mod database;
pub mod error;
pub mod log_store;
pub mod schema;
pub mod unlock_store;

pub use class_store::ClassStore;
pub use config::{load_config, save_config, AppConfig, ConfigError};
pub use database::{Database, DatabaseError};
pub use error::StoreError;
pub use log_store::LogStore;
pub use unlock_store::UnlockStore;
