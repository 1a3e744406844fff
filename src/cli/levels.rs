//! Levels command implementation

use anyhow::Result;

use classlog::ProgressEngine;

use super::context::Context;

const BAR_WIDTH: usize = 30;

/// Compute and show the progress report, storing the new unlocks.
pub fn levels_command(ctx: &Context, json: bool, save: bool) -> Result<()> {
    let logs = ctx.logs().list()?;
    let catalog = ctx.classes().merged()?;
    let unlock_store = ctx.unlocks();
    let previous = unlock_store.load()?;

    let engine = ProgressEngine::new(&ctx.achievements, ctx.config.progression.rules, ctx.offset);
    let report = engine.compute(&logs, catalog.classes(), &previous);

    if save {
        unlock_store.save(&report.unlocks)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let level = &report.level;
    let filled = (level.fraction() * BAR_WIDTH as f32).round() as usize;
    println!("Level {}", level.level);
    println!(
        "[{}{}] {}/{} XP ({} to next level)",
        "#".repeat(filled.min(BAR_WIDTH)),
        "-".repeat(BAR_WIDTH - filled.min(BAR_WIDTH)),
        level.progress_in_level,
        level.required_for_level,
        level.remaining()
    );
    println!(
        "Total {} XP: {} from activity, {} from achievements",
        level.total_experience, report.base_experience, report.achievement_experience
    );
    if report.xp_gained > 0 {
        println!("+{} XP since last time", report.xp_gained);
    }

    println!();
    println!(
        "Logs: {}  Classes attended: {}  Custom classes: {}  Custom lessons: {}",
        report.counts.total_logs,
        report.counts.unique_classes_logged,
        report.counts.custom_class_count,
        report.counts.custom_lesson_count
    );

    println!();
    println!("Achievements ({}/{}):", report.unlocks.len(), ctx.achievements.len());
    for achievement in ctx.achievements.achievements() {
        let times = report.unlocks.get(&achievement.id).copied().unwrap_or(0);
        let mark = if times > 0 { "x" } else { " " };
        let repeat = match achievement.repeatable {
            Some(r) if times > 0 => match r.limit {
                Some(limit) => format!(" x{times}/{limit}"),
                None => format!(" x{times}"),
            },
            _ => String::new(),
        };
        println!(
            "  [{}] {} ({} XP){}  {}",
            mark, achievement.title, achievement.xp, repeat, achievement.description
        );
    }

    Ok(())
}
