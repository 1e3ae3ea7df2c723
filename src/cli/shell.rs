//! Interactive scoreboard session.
//!
//! Menu-driven: the user picks an action, answers the prompts and sees the
//! result. Rule violations are reported and the session goes on.

use anyhow::Result;
use colored::*;
use dialoguer::{Confirm, Input, Select};
use tracing::warn;

use super::replay::CommandOutcome;
use super::{OutputFormat, render};
use crate::application::services::ScoreboardService;
use crate::domain::clock::Clock;
use crate::domain::entities::{GameId, Score, Team};
use crate::domain::repositories::GameRepository;
use crate::error::AppError;

const ACTIONS: [&str; 5] = [
    "Start a game",
    "Update a score",
    "Finish a game",
    "Show summary",
    "Quit",
];

/// Runs the interactive session until the user quits.
///
/// # Errors
///
/// Returns an error only on terminal I/O failures or rendering failures.
pub fn run_shell<R: GameRepository, C: Clock>(
    scoreboard: &ScoreboardService<R, C>,
    format: OutputFormat,
) -> Result<()> {
    println!("{}", "Live Scoreboard".bright_blue().bold());
    println!();

    loop {
        let action = Select::new()
            .with_prompt("What next?")
            .items(&ACTIONS)
            .default(0)
            .interact()?;

        let result = match action {
            0 => start_game(scoreboard, format),
            1 => update_score(scoreboard, format),
            2 => finish_game(scoreboard),
            3 => show_summary(scoreboard, format),
            _ => break,
        };

        match result {
            Ok(()) => {}
            Err(err) => match err.downcast::<AppError>() {
                Ok(app_error) => {
                    warn!(error = %app_error, "Scoreboard operation rejected");
                    println!("{}", render::error(&app_error, format)?.red());
                }
                Err(other) => return Err(other),
            },
        }

        println!();
    }

    println!("{}", "Bye".bright_white());
    Ok(())
}

fn start_game<R: GameRepository, C: Clock>(
    scoreboard: &ScoreboardService<R, C>,
    format: OutputFormat,
) -> Result<()> {
    let home: String = Input::new()
        .with_prompt("Home team")
        .allow_empty(true)
        .interact_text()?;
    let away: String = Input::new()
        .with_prompt("Away team")
        .allow_empty(true)
        .interact_text()?;

    let game = scoreboard.start_game(Team::new(home), Team::new(away))?;

    println!("{}", "Game started".green().bold());
    println!("{}", render::outcome(&CommandOutcome::Started(game), format)?);
    Ok(())
}

fn update_score<R: GameRepository, C: Clock>(
    scoreboard: &ScoreboardService<R, C>,
    format: OutputFormat,
) -> Result<()> {
    let Some(game_id) = pick_game(scoreboard, "Which game?")? else {
        return Ok(());
    };

    let home_team_score: i32 = Input::new().with_prompt("Home score").interact_text()?;
    let away_team_score: i32 = Input::new().with_prompt("Away score").interact_text()?;

    let game = scoreboard.update_score(game_id, Score::new(home_team_score, away_team_score))?;

    println!("{}", "Score updated".green().bold());
    println!("{}", render::outcome(&CommandOutcome::Updated(game), format)?);
    Ok(())
}

fn finish_game<R: GameRepository, C: Clock>(scoreboard: &ScoreboardService<R, C>) -> Result<()> {
    let Some(game_id) = pick_game(scoreboard, "Which game is over?")? else {
        return Ok(());
    };

    let confirmed = Confirm::new()
        .with_prompt("Finish this game? It will leave the scoreboard.")
        .default(true)
        .interact()?;

    if !confirmed {
        println!("{}", "Cancelled".yellow());
        return Ok(());
    }

    scoreboard.finish_game(game_id)?;
    println!("{}", "Game finished".green().bold());
    Ok(())
}

fn show_summary<R: GameRepository, C: Clock>(
    scoreboard: &ScoreboardService<R, C>,
    format: OutputFormat,
) -> Result<()> {
    let games = scoreboard.get_summary();

    println!("{}", "Summary".bright_white().bold());
    println!("{}", render::summary(&games, format)?);
    Ok(())
}

/// Lets the user pick one of the games in progress, in summary order.
fn pick_game<R: GameRepository, C: Clock>(
    scoreboard: &ScoreboardService<R, C>,
    prompt: &str,
) -> Result<Option<GameId>> {
    let games = scoreboard.get_summary();

    if games.is_empty() {
        println!("{}", "No games in progress.".yellow());
        return Ok(None);
    }

    let items: Vec<String> = games.iter().map(render::scoreline).collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;

    Ok(Some(games[index].id))
}
