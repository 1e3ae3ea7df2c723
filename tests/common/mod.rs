#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use live_scoreboard::prelude::*;
use std::sync::Arc;

pub type TestScoreboard = ScoreboardService<InMemoryGameRepository, ManualClock>;

pub struct TestContext {
    pub scoreboard: TestScoreboard,
    pub repository: Arc<InMemoryGameRepository>,
    pub clock: Arc<ManualClock>,
}

pub fn kick_off() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 14, 19, 0, 0).unwrap()
}

pub fn setup() -> TestContext {
    let repository = Arc::new(InMemoryGameRepository::new());
    let clock = Arc::new(ManualClock::new(kick_off()));
    let scoreboard = ScoreboardService::new(Arc::clone(&repository), Arc::clone(&clock));

    TestContext {
        scoreboard,
        repository,
        clock,
    }
}

impl TestContext {
    /// Starts a game at `kick_off() + seconds`.
    pub fn start_at(&self, seconds: i64, home: &str, away: &str) -> Game {
        self.clock.set(kick_off() + Duration::seconds(seconds));
        self.scoreboard
            .start_game(Team::new(home), Team::new(away))
            .unwrap()
    }

    pub fn stored_games(&self) -> Vec<Game> {
        let mut games = self.repository.find_all();
        games.sort_by_key(|game| game.id);
        games
    }
}
