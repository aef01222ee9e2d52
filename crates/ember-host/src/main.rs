//! Binary entrypoint for the ember game host.
//!
//! Prepares the SQLite database, starts the Lua runtime and calls the
//! configured entry point (`game_logic.start_game` by default). A script
//! error is logged and the process still exits successfully.

mod bootstrap;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

use crate::bootstrap::SessionOutcome;
use crate::config::{HostConfig, DEFAULT_CONFIG_PATH};

#[derive(Parser)]
#[command(name = "ember")]
#[command(about = "Game host that runs Lua game scripts against a SQLite save")]
#[command(version)]
struct Cli {
    /// Configuration file path (RON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Database file, overriding the configuration
    #[arg(long)]
    db: Option<PathBuf>,

    /// Scripts directory, overriding the configuration
    #[arg(long)]
    scripts: Option<PathBuf>,

    /// Verbose logging (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => HostConfig::load(path, true),
        None => HostConfig::load(DEFAULT_CONFIG_PATH, false),
    }
    .context("failed to load configuration")?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Some(scripts) = cli.scripts {
        config.scripts_dir = scripts;
    }

    init_logging(&config.log_level, cli.verbose);

    match bootstrap::run(&config)? {
        SessionOutcome::Completed => log::info!("Game finished"),
        SessionOutcome::ScriptFailed(_) => log::warn!("Game ended after a script error"),
    }
    Ok(())
}

fn init_logging(level: &str, verbosity: u8) {
    const LEVELS: [LevelFilter; 6] = [
        LevelFilter::Off,
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];

    let base = LevelFilter::from_str(level).unwrap_or(LevelFilter::Info);
    let index = LEVELS
        .iter()
        .position(|l| *l == base)
        .unwrap_or(3)
        .saturating_add(verbosity as usize)
        .min(LEVELS.len() - 1);

    env_logger::Builder::new()
        .filter_level(LEVELS[index])
        .parse_env("RUST_LOG")
        .init();
}
