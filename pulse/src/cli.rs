//! CLI argument parsing for CulturePulse

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pulse")]
#[command(author, version, about = "Anonymous team feedback dashboard with AI action plans", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the dashboard TUI (default)
    Tui,

    /// Append a feedback entry
    Add {
        /// Mood value from 1 (Awful) to 5 (Great)
        #[arg(short, long)]
        mood: u8,

        /// Free-form comment text
        #[arg(short = 'C', long)]
        comment: String,
    },

    /// Print the mood distribution
    Stats,

    /// Derive an action plan from the current feedback
    Plan,
}
