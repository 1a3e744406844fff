//! Experience, levels and the aggregation feeding them.
//!
//! - [`aggregator`] reduces logs and classes to counts
//! - [`level`] maps experience to a level
//! - [`engine`] resolves achievements and levels together

pub mod aggregator;
pub mod engine;
pub mod level;

pub use aggregator::{aggregate, Counts};
pub use engine::{ProgressEngine, ProgressReport, XpRules};
pub use level::{level_cost, level_from_fractional_xp, level_from_xp, total_xp_for_level, LevelState};
