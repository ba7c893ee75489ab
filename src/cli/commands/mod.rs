//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod fallbacks;
mod search;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_settings_with_options, LoadOptions};

#[derive(Parser)]
#[command(name = "ohana-web")]
#[command(about = "Web front end for an Ohana organization directory")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Address to bind: port, host, or host:port (default from config, then 127.0.0.1:3030)
        #[arg(short, long)]
        bind: Option<String>,
        /// Serve organizations from a fixtures file instead of the API
        #[arg(long)]
        fixtures: Option<PathBuf>,
    },

    /// Run one search from the terminal
    Search {
        /// Keyword to search for
        keyword: String,
        /// Address, city, or ZIP to search near
        #[arg(short, long)]
        location: Option<String>,
        /// Search radius in miles
        #[arg(short, long)]
        radius: Option<String>,
        /// Results page
        #[arg(short, long)]
        page: Option<String>,
        /// Serve organizations from a fixtures file instead of the API
        #[arg(long)]
        fixtures: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the keyword fallback table
    Fallbacks {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
    };
    let (mut settings, config) =
        load_settings_with_options(options).await.map_err(anyhow::Error::msg)?;
    if let Some(ref path) = config.source_path {
        tracing::info!("Using config from {}", path.display());
    }

    match cli.command {
        Commands::Serve { bind, fixtures } => {
            if fixtures.is_some() {
                settings.fixtures = fixtures;
            }
            let bind = bind.unwrap_or_else(|| settings.bind.clone());
            serve::cmd_serve(&settings, &bind).await
        }
        Commands::Search {
            keyword,
            location,
            radius,
            page,
            fixtures,
            json,
        } => {
            if fixtures.is_some() {
                settings.fixtures = fixtures;
            }
            let query = crate::models::SearchQuery {
                keyword: Some(keyword),
                location,
                radius,
                page,
            };
            search::cmd_search(&settings, &query, json).await
        }
        Commands::Fallbacks { json } => fallbacks::cmd_fallbacks(&settings, json),
    }
}
