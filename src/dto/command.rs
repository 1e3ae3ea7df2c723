//! Scoreboard commands, as read from replay scripts.
//!
//! One JSON object per line, tagged by `command`:
//!
//! ```text
//! {"command": "start", "home_team": "Mexico", "away_team": "Canada", "alias": "g1"}
//! {"command": "update", "game": "g1", "home_score": 0, "away_score": 5}
//! {"command": "finish", "game": "g1"}
//! {"command": "summary"}
//! ```

use serde::Deserialize;

use crate::domain::entities::{Score, Side, Team};
use crate::error::GameRule;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ScoreboardCommand {
    Start(StartGameRequest),
    Update(UpdateScoreRequest),
    Finish(FinishGameRequest),
    Summary,
}

/// Request to start a game.
///
/// Team names are optional on the wire so that a missing team is reported as
/// a rule violation instead of a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StartGameRequest {
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    /// Name later commands can use instead of the generated game id.
    pub alias: Option<String>,
}

impl StartGameRequest {
    /// Converts the request into the two teams.
    ///
    /// # Errors
    ///
    /// Returns [`GameRule::MissingTeam`] for the first absent side.
    pub fn teams(&self) -> Result<(Team, Team), GameRule> {
        let home = self
            .home_team
            .as_deref()
            .ok_or(GameRule::MissingTeam(Side::Home))?;
        let away = self
            .away_team
            .as_deref()
            .ok_or(GameRule::MissingTeam(Side::Away))?;

        Ok((Team::new(home), Team::new(away)))
    }
}

/// Request to replace the score of a game.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateScoreRequest {
    /// Game id or alias.
    pub game: String,
    pub home_score: i32,
    pub away_score: i32,
}

impl UpdateScoreRequest {
    pub fn score(&self) -> Score {
        Score::new(self.home_score, self.away_score)
    }
}

/// Request to finish a game.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FinishGameRequest {
    /// Game id or alias.
    pub game: String,
}
