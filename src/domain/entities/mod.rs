//! Core domain entities representing the scoreboard data model.
//!
//! Entities are plain values without business rules; the rules live in
//! [`crate::application::services::ScoreboardService`].
//!
//! # Entity Types
//!
//! - [`Team`] - A competing side, compared by name
//! - [`Score`] - A home/away score pair
//! - [`Game`] - An in-progress game stored by the scoreboard
//!
//! # Design Pattern
//!
//! As with other entities, creation goes through a separate input struct:
//! [`GameDraft`] is what gets handed to the store, [`Game`] is what comes back.

pub mod game;
pub mod score;
pub mod team;

pub use game::{Game, GameDraft, GameId, Side};
pub use score::Score;
pub use team::Team;
