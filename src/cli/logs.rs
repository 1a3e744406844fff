//! Log commands

use anyhow::{bail, Context as _, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use clap::Subcommand;

use classlog::catalog::MergedCatalog;
use classlog::stats::describe_logs;

use super::context::Context;

#[derive(Subcommand)]
pub enum LogCommand {
    /// Log a session
    Add {
        /// Class id
        #[arg(long)]
        class: String,
        /// Lesson id
        #[arg(long)]
        lesson: String,
        /// Session date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Session time as HH:MM (defaults to now)
        #[arg(long)]
        time: Option<String>,
        /// Free-form note
        #[arg(long)]
        note: Option<String>,
    },

    /// List logged sessions, newest first
    List {
        /// Show at most this many entries
        #[arg(long)]
        limit: Option<usize>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change a logged session
    Edit {
        id: String,
        #[arg(long)]
        class: Option<String>,
        #[arg(long)]
        lesson: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        time: Option<String>,
        /// Replace the note (empty string clears it)
        #[arg(long)]
        note: Option<String>,
    },

    /// Delete a logged session
    Delete { id: String },
}

pub fn run(ctx: &Context, command: LogCommand) -> Result<()> {
    match command {
        LogCommand::Add {
            class,
            lesson,
            date,
            time,
            note,
        } => {
            let catalog = ctx.classes().merged()?;
            ensure_known(&catalog, &class, &lesson)?;

            let now = Utc::now().with_timezone(&ctx.offset).naive_local();
            let when = compose(date.as_deref(), time.as_deref(), now)?;
            let stamp = to_rfc3339(when, &ctx.offset)?;

            let record = ctx
                .logs()
                .create(&class, &lesson, Some(stamp.clone()), Some(stamp), note)?;
            println!(
                "Logged {} / {} ({})",
                catalog.class_name(&class),
                catalog.lesson_name(&class, &lesson),
                record.id
            );
        }
        LogCommand::List { limit, json } => {
            let catalog = ctx.classes().merged()?;
            let mut logs = ctx.logs().list()?;
            if let Some(limit) = limit {
                logs.truncate(limit);
            }
            let entries = describe_logs(&logs, &catalog, &ctx.offset);

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
                return Ok(());
            }
            if entries.is_empty() {
                println!("No logs yet.");
                return Ok(());
            }
            for entry in entries {
                println!(
                    "{}  {}, {} {}  {} / {}",
                    entry.id, entry.weekday, entry.date, entry.time, entry.class_name, entry.lesson_name
                );
                if let Some(note) = &entry.note {
                    println!("    {}", note);
                }
            }
        }
        LogCommand::Edit {
            id,
            class,
            lesson,
            date,
            time,
            note,
        } => {
            let store = ctx.logs();
            let mut record = store
                .get(&id)?
                .with_context(|| format!("No log with id {id}"))?;

            if class.is_some() || lesson.is_some() {
                if let Some(class) = class {
                    record.class_id = class;
                }
                if let Some(lesson) = lesson {
                    record.lesson_id = lesson;
                }
                ensure_known(&ctx.classes().merged()?, &record.class_id, &record.lesson_id)?;
            }

            if date.is_some() || time.is_some() {
                let base = record
                    .local_date(&ctx.offset)
                    .unwrap_or_else(|| Utc::now().with_timezone(&ctx.offset).naive_local());
                let base = match record.local_time(&ctx.offset) {
                    Some(t) => base.date().and_time(t.time()),
                    None => base,
                };
                let stamp = to_rfc3339(compose(date.as_deref(), time.as_deref(), base)?, &ctx.offset)?;
                record.date = Some(stamp.clone());
                record.time = Some(stamp);
            }

            if let Some(note) = note {
                record.note = None;
                record = record.with_note(note);
            }

            store.update(&record)?;
            println!("Updated {}", record.id);
        }
        LogCommand::Delete { id } => {
            if ctx.logs().delete(&id)? {
                println!("Deleted {}", id);
            } else {
                println!("No log with id {}", id);
            }
        }
    }

    Ok(())
}

fn ensure_known(catalog: &MergedCatalog, class_id: &str, lesson_id: &str) -> Result<()> {
    let Some(class) = catalog.class(class_id) else {
        bail!("Unknown class: {class_id} (see `classlog class list`)");
    };
    if class.lesson(lesson_id).is_none() {
        bail!("Unknown lesson {lesson_id} in {}", class.name);
    }
    Ok(())
}

/// Replace the date and/or time of `base` with the given inputs.
fn compose(date: Option<&str>, time: Option<&str>, base: NaiveDateTime) -> Result<NaiveDateTime> {
    let day = match date {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .with_context(|| format!("Invalid date {raw:?}, expected YYYY-MM-DD"))?,
        None => base.date(),
    };
    let clock = match time {
        Some(raw) => parse_clock(raw).with_context(|| format!("Invalid time {raw:?}, expected HH:MM"))?,
        None => base.time(),
    };
    Ok(day.and_time(clock))
}

fn parse_clock(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

fn to_rfc3339(local: NaiveDateTime, offset: &FixedOffset) -> Result<String> {
    let stamp: DateTime<FixedOffset> = offset
        .from_local_datetime(&local)
        .single()
        .with_context(|| format!("{local} does not exist at offset {offset}"))?;
    Ok(stamp.to_rfc3339())
}
