//! # Live Scoreboard
//!
//! Tracks the games currently in progress, each with two teams and a running
//! score, and produces a ranked summary of them.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Teams, scores, games and collaborator traits
//! - **Application Layer** ([`application`]) - Scoreboard rules and summary ordering
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store and clocks
//! - **DTO Layer** ([`dto`]) - Serializable views and script commands
//! - **CLI Layer** ([`cli`]) - Interactive shell and script replay for the `scoreboard` binary
//!
//! ## Rules
//!
//! - A game starts at 0-0 between two distinct, non-blank teams
//! - A team plays at most one game at a time
//! - Scores are never negative and are replaced wholesale on update
//! - Finished games leave the scoreboard for good
//! - The summary ranks games by total score, then by earlier kick-off
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive session
//! cargo run -- shell
//!
//! # Replay a JSON-lines script
//! cargo run -- replay demos/world_cup.jsonl
//! ```
//!
//! ## Configuration
//!
//! Logging and output are configured from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod dto;
pub mod error;
pub mod infrastructure;

pub use error::{AppError, GameRule};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ScoreboardService;
    pub use crate::domain::clock::Clock;
    pub use crate::domain::entities::{Game, GameDraft, GameId, Score, Side, Team};
    pub use crate::domain::repositories::GameRepository;
    pub use crate::error::{AppError, GameRule};
    pub use crate::infrastructure::clock::{FixedClock, ManualClock, SystemClock};
    pub use crate::infrastructure::persistence::InMemoryGameRepository;
}
