//! Game repository implementations.
//!
//! This module provides the concrete implementation of
//! [`GameRepository`](crate::domain::repositories::GameRepository).
//!
//! # Repositories
//!
//! - [`InMemoryGameRepository`] - Process-memory map guarded by a read-write lock
//!
//! # Usage
//!
//! ```ignore
//! let repository = Arc::new(InMemoryGameRepository::new());
//! let scoreboard = ScoreboardService::new(repository, Arc::new(SystemClock));
//! ```

mod in_memory_game_repository;

pub use in_memory_game_repository::InMemoryGameRepository;
