//! Application layer services implementing the scoreboard rules.
//!
//! This layer coordinates repository calls, validation and ordering. Services
//! consume the domain collaborator traits and provide the API the hosting
//! layer (see [`crate::cli`]) drives.
//!
//! # Available Services
//!
//! - [`services::scoreboard_service::ScoreboardService`] - Starting, scoring, finishing and ranking games

pub mod services;
