//! Game entity representing an in-progress match between two teams.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::{Score, Team};

/// Unique identifier of a game, assigned by the store on first save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for GameId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Which side of a game a team or score component belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Home,
    Away,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("Home"),
            Self::Away => f.write_str("Away"),
        }
    }
}

/// A game currently in progress.
///
/// Games are immutable values: a score update produces a new `Game` with the
/// same identity and creation time (see [`Game::with_score`]) which is then
/// saved back to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: GameId,
    pub home_team: Team,
    pub away_team: Team,
    pub score: Score,
    pub created_at: DateTime<Utc>,
}

impl Game {
    /// Creates a new Game instance.
    pub fn new(
        id: GameId,
        home_team: Team,
        away_team: Team,
        score: Score,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            home_team,
            away_team,
            score,
            created_at,
        }
    }

    /// Combined score of both teams, the primary summary ranking key.
    pub fn total_score(&self) -> i64 {
        self.score.total()
    }

    /// Returns a copy of this game with the score replaced.
    pub fn with_score(&self, score: Score) -> Self {
        Self {
            score,
            ..self.clone()
        }
    }

    /// Returns true if either side is played by a team with exactly this name.
    pub fn involves(&self, team_name: &str) -> bool {
        self.home_team.name == team_name || self.away_team.name == team_name
    }
}

/// Input data for saving a game.
///
/// `id: None` means the game has never been stored and the store assigns a
/// fresh identifier; `Some(id)` overwrites the game stored under that id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDraft {
    pub id: Option<GameId>,
    pub home_team: Team,
    pub away_team: Team,
    pub score: Score,
    pub created_at: DateTime<Utc>,
}

impl GameDraft {
    /// Draft of a game that has just kicked off: no id yet, score 0-0.
    pub fn kick_off(home_team: Team, away_team: Team, created_at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            home_team,
            away_team,
            score: Score::zero(),
            created_at,
        }
    }

    /// Turns the draft into a stored game under `id`.
    pub fn into_game(self, id: GameId) -> Game {
        Game::new(
            id,
            self.home_team,
            self.away_team,
            self.score,
            self.created_at,
        )
    }
}

impl From<Game> for GameDraft {
    fn from(game: Game) -> Self {
        Self {
            id: Some(game.id),
            home_team: game.home_team,
            away_team: game.away_team,
            score: game.score,
            created_at: game.created_at,
        }
    }
}
