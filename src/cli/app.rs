//! CLI definitions and entry point

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use nextup::config::Config;
use nextup::output::OutputMode;

use super::commands;

/// nextup - pick the next task worth doing
#[derive(Parser, Debug)]
#[command(
    name = "nextup",
    version,
    about = "Personal task manager with priority ordering and dependency-aware next-task selection",
    long_about = "Track tasks with priorities, due dates and dependencies.\n\n\
                  Tasks are ranked by (priority, due date, name); 'next' picks the\n\
                  first task whose dependencies are no longer in the list.\n\
                  Run without a subcommand for the interactive menu."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Task file to use (defaults to the .nextup.toml setting, then tasks.json)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// nextup subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a task
    Add {
        /// Task name
        name: String,

        /// Priority (integer, lower = more important)
        #[arg(short, long, allow_negative_numbers = true)]
        priority: i32,

        /// Names of tasks this one depends on (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        depends_on: Vec<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
    },

    /// List tasks sorted by priority or date
    List {
        /// Sort order: priority or date
        #[arg(short, long)]
        order: Option<String>,
    },

    /// Complete (remove) every task with the given name
    Complete {
        /// Name of the task(s) to complete
        name: String,
    },

    /// Show the next eligible task
    Next,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = Config::load();
    let file = cli.file.unwrap_or_else(|| PathBuf::from(&config.storage.file));

    match cli.command {
        Some(Command::Add {
            name,
            priority,
            depends_on,
            due,
        }) => commands::add(&file, &name, priority, depends_on, due, output_mode),
        Some(Command::List { order }) => commands::list(&file, order.as_deref(), &config, output_mode),
        Some(Command::Complete { name }) => commands::complete(&file, &name, output_mode),
        Some(Command::Next) => commands::next(&file, output_mode),
        None => commands::menu(&file),
    }
}
