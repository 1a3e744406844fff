//! Logged sessions.

pub mod types;

pub use types::{parse_local, LogRecord};
