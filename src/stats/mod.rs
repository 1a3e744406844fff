//! Statistics over the log history.
//!
//! Provides chart-ready distributions and formatted log rows. Rendering is left
//! to the caller.

pub mod distribution;
pub mod entries;

pub use distribution::{
    class_distribution, lesson_distribution, palette_color, time_distribution,
    weekday_distribution, DistributionSlice, CHART_COLORS,
};
pub use entries::{describe_log, describe_logs, LogEntryView};
