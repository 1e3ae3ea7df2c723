//! Scoreboard rules and summary ordering.

use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::clock::Clock;
use crate::domain::entities::{Game, GameDraft, GameId, Score, Side, Team};
use crate::domain::repositories::GameRepository;
use crate::error::{AppError, GameRule};

/// Service enforcing the scoreboard rules.
///
/// It is the only way to change scoreboard state. It keeps no games itself;
/// every game is read from and written back to the repository within a
/// single operation.
///
/// Every operation holds the repository's operation lock for its whole
/// duration, so a team-availability check and the save that follows it cannot
/// interleave with another operation, even one issued by a different service
/// on the same repository.
pub struct ScoreboardService<R: GameRepository, C: Clock> {
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R: GameRepository, C: Clock> Clone for ScoreboardService<R, C> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R: GameRepository, C: Clock> ScoreboardService<R, C> {
    /// Creates a new scoreboard service.
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Starts a game between two teams with a 0-0 score.
    ///
    /// # Validation
    ///
    /// Checked in this order, the first failure wins:
    /// - Neither team name may be blank (home first)
    /// - A team cannot play against itself
    /// - Neither team may already be playing (home first)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RuleViolation`] if validation fails. Nothing is
    /// stored in that case.
    pub fn start_game(&self, home_team: Team, away_team: Team) -> Result<Game, AppError> {
        let lock = self.repository.operation_lock();
        let _guard = lock.lock();

        self.validate_teams(&home_team, &away_team)?;

        let draft = GameDraft::kick_off(home_team, away_team, self.clock.now());
        let game = self.repository.save(draft);

        info!(
            game_id = %game.id,
            home_team = %game.home_team,
            away_team = %game.away_team,
            "Game started"
        );

        Ok(game)
    }

    /// Finishes a game, removing it from the scoreboard for good.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no game has this id.
    pub fn finish_game(&self, game_id: GameId) -> Result<(), AppError> {
        let lock = self.repository.operation_lock();
        let _guard = lock.lock();

        let game = self
            .repository
            .find_by_id(game_id)
            .ok_or_else(|| AppError::not_found(game_id))?;

        self.repository.delete_by_id(game_id);

        info!(
            game_id = %game_id,
            final_score = %game.score,
            "Game finished"
        );

        Ok(())
    }

    /// Replaces the score of a game.
    ///
    /// The new score replaces the old one entirely; it is not added to it.
    /// The score is validated before the game is looked up, so an invalid
    /// score is reported even for an unknown id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RuleViolation`] if either component is negative.
    /// Returns [`AppError::NotFound`] if no game has this id.
    pub fn update_score(&self, game_id: GameId, score: Score) -> Result<Game, AppError> {
        validate_score(&score)?;

        let lock = self.repository.operation_lock();
        let _guard = lock.lock();

        let game = self
            .repository
            .find_by_id(game_id)
            .ok_or_else(|| AppError::not_found(game_id))?;

        let updated = self.repository.save(game.with_score(score).into());

        info!(
            game_id = %updated.id,
            previous_score = %game.score,
            score = %updated.score,
            "Score updated"
        );

        Ok(updated)
    }

    /// Returns every game in progress, ranked.
    ///
    /// Ordered by total score descending, then by start time ascending, then
    /// by id so the order does not depend on how the store iterates.
    pub fn get_summary(&self) -> Vec<Game> {
        let lock = self.repository.operation_lock();
        let _guard = lock.lock();

        let mut games = self.repository.find_all();
        games.sort_by(summary_order);

        debug!(games = games.len(), "Summary built");

        games
    }

    fn validate_teams(&self, home_team: &Team, away_team: &Team) -> Result<(), AppError> {
        if home_team.is_blank() {
            return Err(GameRule::BlankTeamName(Side::Home).into());
        }

        if away_team.is_blank() {
            return Err(GameRule::BlankTeamName(Side::Away).into());
        }

        if home_team == away_team {
            return Err(GameRule::SelfMatch.into());
        }

        for team in [home_team, away_team] {
            if self.repository.exists_by_team_name(&team.name) {
                debug!(team = %team, "Team is already playing");
                return Err(GameRule::TeamAlreadyPlaying(team.name.clone()).into());
            }
        }

        Ok(())
    }
}

fn validate_score(score: &Score) -> Result<(), AppError> {
    if score.home_team_score < 0 {
        return Err(GameRule::NegativeScore(Side::Home).into());
    }

    if score.away_team_score < 0 {
        return Err(GameRule::NegativeScore(Side::Away).into());
    }

    Ok(())
}

fn summary_order(a: &Game, b: &Game) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| a.id.cmp(&b.id))
}
