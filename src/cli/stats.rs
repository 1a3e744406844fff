//! Stats command implementation

use anyhow::Result;
use serde::Serialize;

use classlog::stats::{
    class_distribution, lesson_distribution, time_distribution, weekday_distribution,
    DistributionSlice,
};

use super::context::Context;

#[derive(Serialize)]
struct StatsReport {
    total_logs: usize,
    classes: Vec<DistributionSlice>,
    lessons: Vec<DistributionSlice>,
    times: Vec<DistributionSlice>,
    weekdays: Vec<DistributionSlice>,
}

/// Print class, lesson, time and weekday distributions.
pub fn stats_command(ctx: &Context, json: bool) -> Result<()> {
    let logs = ctx.logs().list()?;
    let catalog = ctx.classes().merged()?;

    let report = StatsReport {
        total_logs: logs.len(),
        classes: class_distribution(&logs, &catalog),
        lessons: lesson_distribution(&logs, &catalog),
        times: time_distribution(&logs, &ctx.offset),
        weekdays: weekday_distribution(&logs, &ctx.offset),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.total_logs == 0 {
        println!("No logs yet.");
        return Ok(());
    }

    println!("{} sessions logged\n", report.total_logs);
    print_section("Classes", &report.classes, report.total_logs);
    print_section("Lessons", &report.lessons, report.total_logs);
    print_section("Time of day", &report.times, report.total_logs);
    print_section("Day of week", &report.weekdays, report.total_logs);

    Ok(())
}

fn print_section(title: &str, slices: &[DistributionSlice], total: usize) {
    println!("{}:", title);
    for slice in slices {
        let share = slice.count as f64 * 100.0 / total.max(1) as f64;
        println!("  {:<32} {:>4}  {:>5.1}%", slice.label, slice.count, share);
    }
    println!();
}
