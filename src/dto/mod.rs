//! Data Transfer Objects for the hosting layer.
//!
//! Serializable views of scoreboard state and deserializable commands. All
//! DTOs use Serde; rule checks stay in the service.

pub mod command;
pub mod game;

pub use command::{FinishGameRequest, ScoreboardCommand, StartGameRequest, UpdateScoreRequest};
pub use game::{GameView, SummaryResponse};
