//! Business logic services for the application layer.

pub mod scoreboard_service;

pub use scoreboard_service::ScoreboardService;
