//! ClassLog - Martial Arts Class Journal
//!
//! Command-line entry point.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

use cli::classes::{ClassCommand, LessonCommand};
use cli::context::Context;
use cli::logs::LogCommand;

#[derive(Parser)]
#[command(name = "classlog")]
#[command(about = "Log martial arts classes and track levels and achievements")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to config.toml in the data directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the database file (overrides the config)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add, list, edit or delete logged sessions
    Log {
        #[command(subcommand)]
        action: LogCommand,
    },

    /// Manage classes
    Class {
        #[command(subcommand)]
        action: ClassCommand,
    },

    /// Manage lessons of a class
    Lesson {
        #[command(subcommand)]
        action: LessonCommand,
    },

    /// Show level, experience and achievements
    Levels {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Do not store the resulting unlocks
        #[arg(long)]
        no_save: bool,
    },

    /// Show class, lesson, time and weekday distributions
    Stats {
        /// Print the distributions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default config.toml
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting ClassLog v{}", env!("CARGO_PKG_VERSION"));

    if let Commands::InitConfig { force } = cli.command {
        return cli::init::init_command(cli.config.as_deref(), force);
    }

    let ctx = Context::open(cli.config.as_deref(), cli.db.as_deref())?;

    match cli.command {
        Commands::Log { action } => cli::logs::run(&ctx, action)?,
        Commands::Class { action } => cli::classes::run_class(&ctx, action)?,
        Commands::Lesson { action } => cli::classes::run_lesson(&ctx, action)?,
        Commands::Levels { json, no_save } => cli::levels::levels_command(&ctx, json, !no_save)?,
        Commands::Stats { json } => cli::stats::stats_command(&ctx, json)?,
        Commands::InitConfig { .. } => {}
    }

    Ok(())
}
