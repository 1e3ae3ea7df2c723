//! Repository trait definitions for the domain layer.
//!
//! This module defines the storage interface the scoreboard consumes. The
//! trait is implemented by concrete stores in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`GameRepository`] - In-progress game storage
//!
//! # Testing
//!
//! See integration tests in `tests/repository_game.rs` for usage examples.

pub mod game_repository;

pub use game_repository::GameRepository;

#[cfg(test)]
pub use game_repository::MockGameRepository;
