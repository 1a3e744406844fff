//! Distribution data for the stats charts.
//!
//! Slices keep the order in which their label first appears in the log
//! history. Colours come from a fixed palette indexed by slice position, so the
//! same history always renders the same way.

use std::collections::HashMap;

use chrono::{FixedOffset, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::catalog::MergedCatalog;
use crate::logs::LogRecord;

/// Chart palette, cycled when there are more slices than colours.
pub const CHART_COLORS: [&str; 24] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#C9CBCF", "#8B9467",
    "#6495ED", "#DC143C", "#B0C4DE", "#2E865F", "#FFC080", "#C71585", "#778899", "#FFB6C1",
    "#4682B4", "#008080", "#7A288A", "#B22222", "#4169E1", "#FA8072", "#228B22", "#808000",
];

/// One slice of a distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionSlice {
    pub label: String,
    pub count: usize,
    pub color: &'static str,
}

/// Colour for the slice at `index`.
pub fn palette_color(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// Count labels in first-seen order.
pub fn tally<I>(labels: I) -> Vec<DistributionSlice>
where
    I: IntoIterator<Item = String>,
{
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut slices: Vec<DistributionSlice> = Vec::new();

    for label in labels {
        let existing = positions.get(&label).copied();
        match existing {
            Some(index) => slices[index].count += 1,
            None => {
                let index = slices.len();
                positions.insert(label.clone(), index);
                slices.push(DistributionSlice {
                    label,
                    count: 1,
                    color: palette_color(index),
                });
            }
        }
    }

    slices
}

/// Logs per class name.
pub fn class_distribution(logs: &[LogRecord], catalog: &MergedCatalog) -> Vec<DistributionSlice> {
    tally(
        logs.iter()
            .map(|log| catalog.class_name(&log.class_id).to_string()),
    )
}

/// Logs per lesson name.
pub fn lesson_distribution(logs: &[LogRecord], catalog: &MergedCatalog) -> Vec<DistributionSlice> {
    tally(
        logs.iter()
            .map(|log| catalog.lesson_name(&log.class_id, &log.lesson_id).to_string()),
    )
}

/// Logs per quarter hour of the day, e.g. `7:30 AM`.
///
/// Logs without a parseable time are left out.
pub fn time_distribution(logs: &[LogRecord], offset: &FixedOffset) -> Vec<DistributionSlice> {
    tally(
        logs.iter()
            .filter_map(|log| log.local_time(offset))
            .map(|time| format_clock(&round_to_quarter_hour(time))),
    )
}

/// Logs per weekday name of the session date.
pub fn weekday_distribution(logs: &[LogRecord], offset: &FixedOffset) -> Vec<DistributionSlice> {
    tally(
        logs.iter()
            .filter_map(|log| log.local_date(offset))
            .map(|date| date.format("%A").to_string()),
    )
}

/// Round down to the start of the quarter hour.
pub fn round_to_quarter_hour(time: NaiveDateTime) -> NaiveDateTime {
    let minute = time.minute() / 15 * 15;
    time.with_minute(minute)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

/// 12-hour clock label, e.g. `7:05 PM`.
pub fn format_clock(time: &NaiveDateTime) -> String {
    time.format("%-I:%M %p").to_string()
}
