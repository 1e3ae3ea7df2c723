//! Rendering of scoreboard results.
//!
//! Everything here returns plain strings; coloring is left to the callers
//! that print to a terminal.

use serde_json::json;

use super::OutputFormat;
use super::replay::CommandOutcome;
use crate::domain::entities::Game;
use crate::dto::{GameView, SummaryResponse};
use crate::error::AppError;

/// One-line text form of a game, e.g. `Spain 10 - Brazil 2`.
pub fn scoreline(game: &Game) -> String {
    format!(
        "{} {} - {} {}",
        game.home_team, game.score.home_team_score, game.away_team, game.score.away_team_score
    )
}

/// Renders the ranked summary.
///
/// Text form numbers the games from 1 in the given order.
pub fn summary(games: &[Game], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => {
            if games.is_empty() {
                return Ok("No games in progress.".to_string());
            }

            Ok(games
                .iter()
                .enumerate()
                .map(|(index, game)| format!("{}. {}", index + 1, scoreline(game)))
                .collect::<Vec<_>>()
                .join("\n"))
        }
        OutputFormat::Json => serde_json::to_string(&SummaryResponse::from_games(games)),
    }
}

/// Renders the result of a single command.
pub fn outcome(outcome: &CommandOutcome, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(match outcome {
            CommandOutcome::Started(game) => {
                format!("Started: {} [{}]", scoreline(game), game.id)
            }
            CommandOutcome::Updated(game) => format!("Updated: {}", scoreline(game)),
            CommandOutcome::Finished(id) => format!("Finished: {id}"),
            CommandOutcome::Summary(games) => summary(games, format)?,
        }),
        OutputFormat::Json => {
            let value = match outcome {
                CommandOutcome::Started(game) => {
                    json!({ "event": "started", "game": GameView::from(game) })
                }
                CommandOutcome::Updated(game) => {
                    json!({ "event": "updated", "game": GameView::from(game) })
                }
                CommandOutcome::Finished(id) => json!({ "event": "finished", "id": id }),
                CommandOutcome::Summary(games) => {
                    json!({ "event": "summary", "summary": SummaryResponse::from_games(games) })
                }
            };
            serde_json::to_string(&value)
        }
    }
}

/// Renders a scoreboard error.
pub fn error(err: &AppError, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(err.to_string()),
        OutputFormat::Json => serde_json::to_string(&err.to_body()),
    }
}
