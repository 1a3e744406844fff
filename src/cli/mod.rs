//! CLI command implementations

pub mod classes;
pub mod context;
pub mod init;
pub mod levels;
pub mod logs;
pub mod stats;
