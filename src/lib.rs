//! bikeshare library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Explore) => commands::explore::handle(cfg),
        Some(Commands::Report { filter, json }) => {
            commands::report::handle(filter.to_filter(), *json, cfg)
        }
        Some(Commands::Rows { filter, page }) => {
            commands::rows::handle(filter.to_filter(), *page, cfg)
        }
        Some(Commands::Init { force }) => {
            commands::init::handle(config_path, cli.data_dir.as_deref(), *force)
        }
        Some(cmd @ Commands::Config { .. }) => commands::config::handle(cmd, cfg, config_path),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init_logging();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_file);

    // init must work even when the existing file is broken
    let mut cfg = if matches!(cli.command, Some(Commands::Init { .. })) {
        Config::default()
    } else {
        Config::load_from(&config_path)?
    };

    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    dispatch(&cli, &cfg, &config_path)
}
