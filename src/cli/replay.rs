//! Replays JSON-lines command scripts against a fresh scoreboard.
//!
//! Games can be referenced by their generated id or by an alias given when
//! they were started. The replay owns a [`ManualClock`] that moves one second
//! forward before every command, so games started later in a script always
//! have later kick-off times and summaries are reproducible.

use anyhow::Context;
use chrono::{DateTime, Duration, Utc};
use colored::*;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use super::{OutputFormat, render};
use crate::application::services::ScoreboardService;
use crate::domain::entities::{Game, GameId};
use crate::domain::repositories::GameRepository;
use crate::dto::{ScoreboardCommand, StartGameRequest};
use crate::error::AppError;
use crate::infrastructure::clock::ManualClock;

/// Time between two consecutive commands of a replay.
const COMMAND_STEP_SECONDS: i64 = 1;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error(transparent)]
    Scoreboard(#[from] AppError),
    #[error("Unknown game reference '{0}'")]
    UnknownGame(String),
    #[error("Alias '{0}' is already in use")]
    DuplicateAlias(String),
    #[error("Invalid command: {0}")]
    InvalidCommand(#[from] serde_json::Error),
}

impl ReplayError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Scoreboard(err) => err.code(),
            Self::UnknownGame(_) => "unknown_game",
            Self::DuplicateAlias(_) => "duplicate_alias",
            Self::InvalidCommand(_) => "invalid_command",
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Scoreboard(err) => json!(err.to_body()),
            other => json!({
                "error": {
                    "code": other.code(),
                    "message": other.to_string(),
                    "details": {},
                }
            }),
        }
    }
}

/// Result of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Started(Game),
    Updated(Game),
    Finished(GameId),
    Summary(Vec<Game>),
}

/// One executed script line.
#[derive(Debug)]
pub struct ReplayEntry {
    /// 1-based line number in the script.
    pub line: usize,
    pub result: Result<CommandOutcome, ReplayError>,
}

#[derive(Debug)]
pub struct ReplayReport {
    pub entries: Vec<ReplayEntry>,
    /// Summary after the last executed command.
    pub summary: Vec<Game>,
}

impl ReplayReport {
    pub fn failures(&self) -> impl Iterator<Item = &ReplayEntry> {
        self.entries.iter().filter(|entry| entry.result.is_err())
    }
}

pub struct Replay<R: GameRepository> {
    scoreboard: ScoreboardService<R, ManualClock>,
    clock: Arc<ManualClock>,
    aliases: HashMap<String, GameId>,
}

impl<R: GameRepository> Replay<R> {
    /// Creates a replay over `repository` whose clock starts at `start`.
    pub fn new(repository: Arc<R>, start: DateTime<Utc>) -> Self {
        let clock = Arc::new(ManualClock::new(start));
        Self {
            scoreboard: ScoreboardService::new(repository, Arc::clone(&clock)),
            clock,
            aliases: HashMap::new(),
        }
    }

    /// Executes a single command.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::Scoreboard`] for rule violations and unknown
    /// games, [`ReplayError::UnknownGame`] for references that are neither an
    /// alias nor a game id, and [`ReplayError::DuplicateAlias`] when a start
    /// reuses an alias of a game still in progress.
    pub fn execute(&mut self, command: ScoreboardCommand) -> Result<CommandOutcome, ReplayError> {
        self.clock.advance(Duration::seconds(COMMAND_STEP_SECONDS));

        match command {
            ScoreboardCommand::Start(request) => self.start(request),
            ScoreboardCommand::Update(request) => {
                let id = self.resolve(&request.game)?;
                let game = self.scoreboard.update_score(id, request.score())?;
                Ok(CommandOutcome::Updated(game))
            }
            ScoreboardCommand::Finish(request) => {
                let id = self.resolve(&request.game)?;
                self.scoreboard.finish_game(id)?;
                self.aliases.retain(|_, aliased| *aliased != id);
                Ok(CommandOutcome::Finished(id))
            }
            ScoreboardCommand::Summary => Ok(CommandOutcome::Summary(self.scoreboard.get_summary())),
        }
    }

    /// Runs a whole script.
    ///
    /// Blank lines and lines starting with `#` are skipped. A failing command
    /// is recorded and the replay continues, unless `fail_fast` is set.
    ///
    /// # Errors
    ///
    /// Only read failures are returned as errors; command failures end up in
    /// the report.
    pub fn run(&mut self, script: impl BufRead, fail_fast: bool) -> std::io::Result<ReplayReport> {
        let mut entries = Vec::new();

        for (index, line) in script.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let result = serde_json::from_str::<ScoreboardCommand>(trimmed)
                .map_err(ReplayError::from)
                .and_then(|command| self.execute(command));

            let failed = result.is_err();
            if let Err(err) = &result {
                warn!(line = index + 1, error = %err, "Replay command failed");
            }

            entries.push(ReplayEntry {
                line: index + 1,
                result,
            });

            if failed && fail_fast {
                break;
            }
        }

        Ok(ReplayReport {
            entries,
            summary: self.scoreboard.get_summary(),
        })
    }

    fn start(&mut self, request: StartGameRequest) -> Result<CommandOutcome, ReplayError> {
        let (home_team, away_team) = request.teams().map_err(AppError::from)?;

        if let Some(alias) = &request.alias
            && self.aliases.contains_key(alias)
        {
            return Err(ReplayError::DuplicateAlias(alias.clone()));
        }

        let game = self.scoreboard.start_game(home_team, away_team)?;

        if let Some(alias) = request.alias {
            self.aliases.insert(alias, game.id);
        }

        Ok(CommandOutcome::Started(game))
    }

    fn resolve(&self, reference: &str) -> Result<GameId, ReplayError> {
        if let Some(id) = self.aliases.get(reference) {
            return Ok(*id);
        }

        reference
            .parse()
            .map_err(|_| ReplayError::UnknownGame(reference.to_string()))
    }
}

/// Replays the script at `path` and prints every result.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if a command fails while
/// `fail_fast` is set.
pub fn replay_file<R: GameRepository>(
    repository: Arc<R>,
    path: &Path,
    fail_fast: bool,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open replay script {}", path.display()))?;

    info!(script = %path.display(), "Replaying script");

    let mut replay = Replay::new(repository, Utc::now());
    let report = replay
        .run(BufReader::new(file), fail_fast)
        .with_context(|| format!("Failed to read replay script {}", path.display()))?;

    for entry in &report.entries {
        match (&entry.result, format) {
            (Ok(outcome), _) => println!("{}", render::outcome(outcome, format)?),
            (Err(err), OutputFormat::Text) => {
                println!("{}", format!("line {}: {}", entry.line, err).red());
            }
            (Err(err), OutputFormat::Json) => {
                println!("{}", json!({ "line": entry.line, "failure": err.to_json() }));
            }
        }
    }

    if format == OutputFormat::Text {
        println!();
        println!("{}", "Summary".bright_white().bold());
    }
    println!("{}", render::summary(&report.summary, format)?);

    let failures = report.failures().count();
    if fail_fast && failures > 0 {
        anyhow::bail!("Replay stopped after a failing command");
    }

    Ok(())
}
