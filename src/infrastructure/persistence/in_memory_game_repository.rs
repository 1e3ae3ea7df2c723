//! Process-memory implementation of the game repository.

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::{Game, GameDraft, GameId};
use crate::domain::repositories::GameRepository;

/// In-memory repository of games in progress.
///
/// The map lives behind its own lock so one repository can be shared by
/// several services. A second lock, handed out by `operation_lock`, serializes
/// whole service operations across all of them. Nothing survives a process
/// restart.
#[derive(Default)]
pub struct InMemoryGameRepository {
    games: RwLock<HashMap<GameId, Game>>,
    operation_lock: Arc<Mutex<()>>,
}

impl InMemoryGameRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `games`.
    pub fn with_games(games: impl IntoIterator<Item = Game>) -> Self {
        let games = games.into_iter().map(|game| (game.id, game)).collect();
        Self {
            games: RwLock::new(games),
            operation_lock: Arc::default(),
        }
    }
}

impl GameRepository for InMemoryGameRepository {
    fn save(&self, game: GameDraft) -> Game {
        let id = game.id.unwrap_or_else(GameId::generate);
        let game = game.into_game(id);

        let previous = self.games.write().insert(id, game.clone());
        debug!(game_id = %id, replaced = previous.is_some(), "Game saved");

        game
    }

    fn find_by_id(&self, id: GameId) -> Option<Game> {
        self.games.read().get(&id).cloned()
    }

    fn delete_by_id(&self, id: GameId) {
        if self.games.write().remove(&id).is_some() {
            debug!(game_id = %id, "Game deleted");
        }
    }

    fn find_all(&self) -> Vec<Game> {
        self.games.read().values().cloned().collect()
    }

    fn exists_by_team_name(&self, team_name: &str) -> bool {
        self.games
            .read()
            .values()
            .any(|game| game.involves(team_name))
    }

    fn operation_lock(&self) -> Arc<Mutex<()>> {
        Arc::clone(&self.operation_lock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Score, Team};
    use chrono::Utc;

    fn draft(home: &str, away: &str) -> GameDraft {
        GameDraft::kick_off(Team::new(home), Team::new(away), Utc::now())
    }

    #[test]
    fn test_save_assigns_distinct_ids() {
        let repo = InMemoryGameRepository::new();

        let first = repo.save(draft("Mexico", "Canada"));
        let second = repo.save(draft("Spain", "Brazil"));

        assert_ne!(first.id, second.id);
        assert_eq!(repo.find_all().len(), 2);
    }

    #[test]
    fn test_save_with_id_overwrites() {
        let repo = InMemoryGameRepository::new();

        let game = repo.save(draft("Mexico", "Canada"));
        let updated = repo.save(game.with_score(Score::new(0, 5)).into());

        assert_eq!(updated.id, game.id);
        assert_eq!(repo.find_all().len(), 1);
        assert_eq!(repo.find_by_id(game.id).unwrap().score, Score::new(0, 5));
    }

    #[test]
    fn test_with_games_prepopulates() {
        let game = draft("Uruguay", "Italy").into_game(GameId::generate());
        let repo = InMemoryGameRepository::with_games([game.clone()]);

        assert_eq!(repo.find_by_id(game.id), Some(game));
        assert!(repo.exists_by_team_name("Italy"));
    }

    #[test]
    fn test_operation_lock_is_shared() {
        let repo = InMemoryGameRepository::new();

        let first = repo.operation_lock();
        let second = repo.operation_lock();
        assert!(Arc::ptr_eq(&first, &second));

        let _guard = first.lock();
        assert!(second.try_lock().is_none());
    }
}
