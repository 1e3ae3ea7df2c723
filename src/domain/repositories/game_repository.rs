//! Repository trait for in-progress game storage.

use std::sync::Arc;

use crate::domain::entities::{Game, GameDraft, GameId};

/// Repository interface for the set of games currently in progress.
///
/// The store is the single owner of live games. None of its operations can
/// fail: a missing game is reported as `None`/`false`, never as an error.
///
/// Implementations must be safe to share between threads; each operation is
/// atomic on its own. Sequences of calls (check-then-save) are made atomic by
/// holding the store's [`GameRepository::operation_lock`], which every service
/// built on the same store shares.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryGameRepository`] - process-memory map
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_game.rs`
#[cfg_attr(test, mockall::automock)]
pub trait GameRepository: Send + Sync {
    /// Stores a game.
    ///
    /// A draft without id gets a newly generated unique identifier; a draft
    /// with an id overwrites whatever is stored under it.
    ///
    /// # Returns
    ///
    /// The stored game, identifier populated.
    fn save(&self, game: GameDraft) -> Game;

    /// Finds a game by its identifier.
    ///
    /// # Returns
    ///
    /// - `Some(Game)` if found
    /// - `None` if not found
    fn find_by_id(&self, id: GameId) -> Option<Game>;

    /// Removes the game with this identifier. No-op if absent.
    fn delete_by_id(&self, id: GameId);

    /// Snapshot of every stored game, in no particular order.
    ///
    /// Each call returns a fresh, independent collection.
    fn find_all(&self) -> Vec<Game>;

    /// Returns true if any stored game has a home or away team whose name is
    /// exactly `team_name` (case-sensitive, no trimming).
    fn exists_by_team_name(&self, team_name: &str) -> bool;

    /// Lock guarding multi-call operations on this store.
    ///
    /// Every call returns the same lock, so all services sharing the store
    /// exclude each other while they hold it.
    fn operation_lock(&self) -> Arc<parking_lot::Mutex<()>>;
}
