//! bikeshare library root.
//! Exposes the CLI parser, the high-level run() function and the
//! loader/statistics modules behind the interactive session.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher; `config_path` is the file `cfg` was read from.
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        None => cli::commands::explore::handle(cfg),
        Some(cmd @ Commands::Config { .. }) => {
            cli::commands::config::handle(cmd, cfg, config_path)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init_logging();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_file);
    let mut cfg = Config::load(Some(&config_path))?;

    // command-line override of the data directory
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.to_string_lossy().to_string();
    }

    dispatch(&cli, &cfg, &config_path)
}
