//! babystats library root.
//! Exposes the normalization pipeline, the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;
use utils::path::expand_tilde;

pub use crate::core::analysis::{
    AnalysisConfig, DaytimeSleepSummary, analyze_daytime_sleep, analyze_daytime_sleep_at,
};
pub use crate::core::daytime::{DayBoundaries, is_daytime};
pub use crate::core::duration::{parse_duration, parse_duration_hours};
pub use crate::core::loader::{load_archive, load_archive_bytes, load_archive_file};
pub use models::baby_stats::BabyStats;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Analyze { .. } => cli::commands::analyze::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Inspect { .. } => cli::commands::inspect::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // try_init: a subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config_path = cli.config.as_deref().map(expand_tilde);
    let cfg = Config::load_from(config_path.as_deref())?;

    dispatch(&cli, &cfg)
}
