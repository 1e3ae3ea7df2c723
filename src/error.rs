//! Scoreboard error types.
//!
//! Both kinds are caller-recoverable: a [`AppError::RuleViolation`] means the
//! input broke a game rule, a [`AppError::NotFound`] means the game reference
//! is stale or wrong. Neither is a system fault.

use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

use crate::domain::entities::{GameId, Side};

/// A broken scoreboard rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameRule {
    #[error("{0} team cannot be missing.")]
    MissingTeam(Side),
    #[error("{0} team cannot be blank.")]
    BlankTeamName(Side),
    #[error("Team cannot play against itself.")]
    SelfMatch,
    #[error("Team '{0}' must be available (not currently playing) to start the game.")]
    TeamAlreadyPlaying(String),
    #[error("{0} team score must be non-negative.")]
    NegativeScore(Side),
}

impl GameRule {
    fn details(&self) -> Value {
        match self {
            Self::MissingTeam(side) | Self::BlankTeamName(side) | Self::NegativeScore(side) => {
                json!({ "side": side.to_string().to_lowercase() })
            }
            Self::SelfMatch => json!({}),
            Self::TeamAlreadyPlaying(team) => json!({ "team": team }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Game rules violation: {0}")]
    RuleViolation(#[from] GameRule),
    #[error("Game with id={id} not found!")]
    NotFound { id: GameId },
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Debug, Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

impl AppError {
    pub fn not_found(id: GameId) -> Self {
        Self::NotFound { id }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::RuleViolation(_) => "rule_violation",
            Self::NotFound { .. } => "not_found",
        }
    }

    pub fn details(&self) -> Value {
        match self {
            Self::RuleViolation(rule) => rule.details(),
            Self::NotFound { id } => json!({ "id": id }),
        }
    }

    /// Envelope used when errors are rendered as JSON.
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: ErrorInfo {
                code: self.code(),
                message: self.to_string(),
                details: self.details(),
            },
        }
    }
}
