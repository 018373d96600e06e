use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use feedbackstore::cli::{Cli, Command};
use feedbackstore::config::Config;
use feedbackstore::{EntryStore, mood_histogram};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("feedbackstore starting");

    match cli.command {
        Command::Add { mood, comment } => {
            let mut store = EntryStore::open(&config.slot_path)?;
            let entry = store.append(mood, comment)?;
            println!("{} Recorded {} feedback: {}", "✓".green(), entry_label(entry.mood).cyan(), entry.id.dimmed());
            if !store.is_persistent() {
                println!("{}", "  (storage unavailable, entry kept in-memory for this session)".yellow());
            }
        }
        Command::List { limit } => {
            let store = EntryStore::open(&config.slot_path)?;
            let entries = store.entries();
            if entries.is_empty() {
                println!("No feedback yet");
            }
            for entry in entries.iter().take(limit.unwrap_or(usize::MAX)) {
                let when = chrono::DateTime::from_timestamp_millis(entry.timestamp)
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{} {} {}",
                    when.dimmed(),
                    format!("[{}/5]", entry.mood).yellow(),
                    entry.comment
                );
            }
        }
        Command::Stats => {
            let store = EntryStore::open(&config.slot_path)?;
            let histogram = mood_histogram(store.entries());
            for bucket in histogram {
                println!(
                    "{:>5} {} {}",
                    bucket.label.cyan(),
                    "█".repeat(bucket.count).green(),
                    bucket.count
                );
            }
        }
        Command::Path => {
            println!("{}", config.slot_path.display());
        }
        Command::Clear => {
            let mut store = EntryStore::open(&config.slot_path)?;
            store.clear()?;
            println!("{} Cleared all feedback entries", "✓".green());
        }
    }

    Ok(())
}

fn entry_label(mood: u8) -> &'static str {
    feedbackstore::Mood::from_value(mood).map(|m| m.label()).unwrap_or("?")
}
