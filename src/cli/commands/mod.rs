//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod fetch;
mod mirrors;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_settings, LoadOptions};

#[derive(Parser)]
#[command(name = "animirror")]
#[command(about = "Anime metadata scraper with mirror failover")]
#[command(version)]
pub struct Cli {
    /// Config file path (defaults to ./animirror.toml when present)
    #[arg(short, long, global = true, env = "ANIMIRROR_CONFIG")]
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
    /// Start the HTTP API server
    Serve {
        /// Bind address: PORT, HOST, or HOST:PORT (defaults to configured host and port)
        bind: Option<String>,
    },

    /// Scrape one anime and print the merged result as JSON
    Fetch {
        /// Anime slug, e.g. one-piece-100
        slug: String,
    },

    /// Probe every configured mirror and show which one would be used
    Mirrors,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load_settings(LoadOptions {
        config_path: cli.config,
    })?;

    match cli.command {
        Commands::Serve { bind } => serve::cmd_serve(&settings, bind.as_deref()).await,
        Commands::Fetch { slug } => fetch::cmd_fetch(&settings, &slug).await,
        Commands::Mirrors => mirrors::cmd_mirrors(&settings).await,
    }
}
