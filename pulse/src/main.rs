//! CulturePulse - anonymous team feedback dashboard
//!
//! CLI entry point for the TUI and the one-shot subcommands.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{info, warn};

use culturepulse::cli::{Cli, Command};
use culturepulse::config::Config;
use culturepulse::llm::create_client;
use culturepulse::summary::Summarizer;
use culturepulse::tui;
use feedbackstore::{EntryStore, mood_histogram};

/// Logs go to a file under the data dir so the TUI stays clean
fn setup_logging(cli_log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("culturepulse")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let level = match cli_log_level.map(|s| s.to_uppercase()) {
        Some(s) => match s.as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(log_dir.join("culturepulse.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

/// Build the summarizer when a credential is available
///
/// Returns None (with a logged warning) when the key env var is unset, so
/// store-only commands and the dashboard keep working.
fn build_summarizer(config: &Config) -> Option<Arc<Summarizer>> {
    if let Err(e) = config.validate() {
        warn!("Summarization disabled: {}", e);
        return None;
    }
    match create_client(&config.llm) {
        Ok(client) => Some(Arc::new(Summarizer::new(client, config.llm.max_tokens))),
        Err(e) => {
            warn!("Summarization disabled: {}", e);
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    match cli.command {
        None | Some(Command::Tui) => {
            let store = EntryStore::open(&config.store.path)?;
            let summarizer = build_summarizer(&config);
            tui::run(store, summarizer).await
        }
        Some(Command::Add { mood, comment }) => {
            let mut store = EntryStore::open(&config.store.path)?;
            let entry = store.append(mood, comment)?;
            println!("{} Feedback recorded ({})", "✓".green(), entry.id.dimmed());
            if !store.is_persistent() {
                println!("{}", "  (storage unavailable, entry kept in-memory for this session)".yellow());
            }
            Ok(())
        }
        Some(Command::Stats) => {
            let store = EntryStore::open(&config.store.path)?;
            let histogram = mood_histogram(store.entries());
            println!("{} ({} entries)", "Team Mood Overview".bold(), store.entries().len());
            for bucket in histogram {
                println!(
                    "{:>5} {} {}",
                    bucket.label.cyan(),
                    "█".repeat(bucket.count).green(),
                    bucket.count
                );
            }
            Ok(())
        }
        Some(Command::Plan) => cmd_plan(&config).await,
    }
}

/// One-shot summarization to stdout
async fn cmd_plan(config: &Config) -> Result<()> {
    config.validate()?;

    let store = EntryStore::open(&config.store.path)?;
    if store.entries().is_empty() {
        println!("No feedback to analyze yet");
        return Ok(());
    }

    let client = create_client(&config.llm)?;
    let summarizer = Summarizer::new(client, config.llm.max_tokens);

    let plan = summarizer
        .summarize(store.entries())
        .await
        .context("Could not derive an action plan")?;

    // entries() is non-empty here, so the summarizer always issues the call
    let Some(plan) = plan else {
        return Ok(());
    };

    println!("{}", "✨ Management Action Plan".bold());
    println!();
    print!("{}", "Themes: ".dimmed());
    for theme in &plan.themes {
        print!("{} ", format!("#{}", theme).green());
    }
    println!();
    println!();
    for (i, point) in plan.points.iter().enumerate() {
        println!("  {}. {}", i + 1, point);
    }

    Ok(())
}
