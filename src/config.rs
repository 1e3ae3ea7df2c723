//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the
//! scoreboard starts.
//!
//! ```bash
//! export RUST_LOG="debug"
//! export LOG_FORMAT="json"
//! export SCOREBOARD_OUTPUT="json"
//! export SCOREBOARD_COLOR="false"
//! ```
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SCOREBOARD_OUTPUT` - Output format for results: `text` or `json` (default: `text`)
//! - `SCOREBOARD_COLOR` - Colored terminal output (default: `true`)

use anyhow::Result;
use std::env;

use crate::cli::OutputFormat;

/// Scoreboard configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: String,
    /// Output format for summaries and command results. A `--output` flag
    /// on the command line takes precedence.
    pub output_format: String,
    pub color: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default, so loading itself never fails; use
    /// [`Config::validate`] to reject bad values.
    pub fn from_env() -> Result<Self> {
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let output_format = env::var("SCOREBOARD_OUTPUT").unwrap_or_else(|_| "text".to_string());

        let color = env::var("SCOREBOARD_COLOR")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(true);

        Ok(Self {
            log_level,
            log_format,
            output_format,
            color,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `output_format` is not `text` or `json`
    /// - `log_level` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.output_format.parse::<OutputFormat>().is_err() {
            anyhow::bail!(
                "SCOREBOARD_OUTPUT must be 'text' or 'json', got '{}'",
                self.output_format
            );
        }

        if self.log_level.trim().is_empty() {
            anyhow::bail!("RUST_LOG must not be empty");
        }

        Ok(())
    }

    /// Parsed output format. Falls back to text for unvalidated configs.
    pub fn output(&self) -> OutputFormat {
        self.output_format.parse().unwrap_or_default()
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Log level: {}", self.log_level);
        tracing::debug!("  Log format: {}", self.log_format);
        tracing::debug!("  Output format: {}", self.output_format);
        tracing::debug!("  Color: {}", self.color);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
