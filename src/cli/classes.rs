//! Class and lesson commands

use anyhow::Result;
use clap::Subcommand;

use super::context::Context;

#[derive(Subcommand)]
pub enum ClassCommand {
    /// List all classes with their lessons
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a custom class
    Add { name: String },

    /// Rename a custom class
    Rename { id: String, name: String },

    /// Delete a custom class
    Delete {
        id: String,
        /// Keep the logs recorded for the class
        #[arg(long)]
        keep_logs: bool,
    },
}

#[derive(Subcommand)]
pub enum LessonCommand {
    /// Add a lesson to a class
    Add { class_id: String, name: String },

    /// Rename a custom lesson
    Rename {
        class_id: String,
        lesson_id: String,
        name: String,
    },

    /// Delete a custom lesson
    Delete { class_id: String, lesson_id: String },
}

pub fn run_class(ctx: &Context, command: ClassCommand) -> Result<()> {
    let store = ctx.classes();

    match command {
        ClassCommand::List { json } => {
            let catalog = store.merged()?;
            if json {
                println!("{}", serde_json::to_string_pretty(catalog.classes())?);
                return Ok(());
            }

            for class in catalog.classes() {
                let marker = if class.is_custom { " (custom)" } else { "" };
                println!("{}  {}{}", class.id, class.name, marker);
                for lesson in &class.lessons {
                    let marker = if lesson.is_custom { " (custom)" } else { "" };
                    println!("    {}  {}{}", lesson.id, lesson.name, marker);
                }
            }
        }
        ClassCommand::Add { name } => {
            let class = store.add_class(&name)?;
            println!("Added class {} ({})", class.name, class.id);
        }
        ClassCommand::Rename { id, name } => {
            store.edit_class(&id, &name)?;
            println!("Renamed class {}", id);
        }
        ClassCommand::Delete { id, keep_logs } => {
            if !store.delete_class(&id)? {
                println!("No custom class with id {}", id);
                return Ok(());
            }
            println!("Deleted class {}", id);

            if !keep_logs {
                let removed = ctx.logs().delete_for_class(&id)?;
                if removed > 0 {
                    println!("Deleted {} log(s) of that class", removed);
                }
            }
        }
    }

    Ok(())
}

pub fn run_lesson(ctx: &Context, command: LessonCommand) -> Result<()> {
    let store = ctx.classes();

    match command {
        LessonCommand::Add { class_id, name } => {
            let lesson = store.add_lesson(&class_id, &name)?;
            println!("Added lesson {} ({})", lesson.name, lesson.id);
        }
        LessonCommand::Rename {
            class_id,
            lesson_id,
            name,
        } => {
            store.edit_lesson(&class_id, &lesson_id, &name)?;
            println!("Renamed lesson {}", lesson_id);
        }
        LessonCommand::Delete { class_id, lesson_id } => {
            if store.delete_lesson(&class_id, &lesson_id)? {
                println!("Deleted lesson {}", lesson_id);
            } else {
                println!("No custom lesson {} in {}", lesson_id, class_id);
            }
        }
    }

    Ok(())
}
