//! `scoreboard` - live sports scoreboard.
//!
//! # Usage
//!
//! ```bash
//! # Interactive session
//! cargo run -- shell
//!
//! # Replay a command script, JSON output
//! cargo run -- --output json replay demos/world_cup.jsonl
//!
//! # Stop at the first failing command
//! cargo run -- replay demos/world_cup.jsonl --fail-fast
//! ```
//!
//! # Environment Variables
//!
//! See [`live_scoreboard::config`].

use live_scoreboard::application::services::ScoreboardService;
use live_scoreboard::cli::replay::replay_file;
use live_scoreboard::cli::shell::run_shell;
use live_scoreboard::cli::OutputFormat;
use live_scoreboard::config::{self, Config};
use live_scoreboard::infrastructure::clock::SystemClock;
use live_scoreboard::infrastructure::persistence::InMemoryGameRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Live sports scoreboard.
#[derive(Parser)]
#[command(name = "scoreboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format (overrides SCOREBOARD_OUTPUT)
    #[arg(short, long, value_enum, global = true)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive scoreboard session
    Shell,

    /// Replay a JSON-lines command script against a fresh scoreboard
    Replay {
        /// Path to the script
        file: PathBuf,

        /// Stop at the first failing command
        #[arg(long)]
        fail_fast: bool,
    },
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    init_tracing(&config);
    config.print_summary();

    colored::control::set_override(config.color);
    let output = cli.output.unwrap_or_else(|| config.output());

    let repository = Arc::new(InMemoryGameRepository::new());

    match cli.command {
        Commands::Shell => {
            let scoreboard = ScoreboardService::new(repository, Arc::new(SystemClock));
            run_shell(&scoreboard, output)
        }
        Commands::Replay { file, fail_fast } => replay_file(repository, &file, fail_fast, output),
    }
}

/// Installs the global tracing subscriber. Logs go to stderr so scoreboard
/// output on stdout stays machine-readable.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(config.color)
            .with_writer(std::io::stderr)
            .init();
    }
}
