//! CLI argument parsing for feedbackstore

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "fb")]
#[command(author, version, about = "Anonymous feedback entry store", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Append a feedback entry
    Add {
        /// Mood value from 1 (Awful) to 5 (Great)
        #[arg(short, long)]
        mood: u8,

        /// Free-form comment text
        #[arg(short = 'C', long)]
        comment: String,
    },

    /// List entries, most recent first
    List {
        /// Maximum entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the mood distribution
    Stats,

    /// Print the slot path
    Path,

    /// Delete all entries (administrative reset)
    Clear,
}
