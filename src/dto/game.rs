//! Externally-facing projection of a game.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Game, GameId};

/// Flat, serializable view of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub id: GameId,
    pub home_team: String,
    pub away_team: String,
    pub home_score: i32,
    pub away_score: i32,
    pub total_score: i64,
    /// RFC 3339 timestamp of kick-off.
    pub created_at: DateTime<Utc>,
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id,
            home_team: game.home_team.name.clone(),
            away_team: game.away_team.name.clone(),
            home_score: game.score.home_team_score,
            away_score: game.score.away_team_score,
            total_score: game.total_score(),
            created_at: game.created_at,
        }
    }
}

/// Ranked summary, as shown to users.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub games: Vec<GameView>,
}

impl SummaryResponse {
    pub fn from_games(games: &[Game]) -> Self {
        Self {
            games: games.iter().map(GameView::from).collect(),
        }
    }
}
