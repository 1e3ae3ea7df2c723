mod common;

use common::{kick_off, setup};
use live_scoreboard::prelude::*;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_start_game_with_clock_time() {
    let ctx = setup();

    let game = ctx
        .scoreboard
        .start_game(Team::new("Mexico"), Team::new("Canada"))
        .unwrap();

    assert_eq!(game.score, Score::zero());
    assert_eq!(game.created_at, kick_off());
    assert_eq!(ctx.repository.find_by_id(game.id), Some(game));
}

#[test]
fn test_invalid_starts_leave_store_unchanged() {
    let ctx = setup();
    let existing = ctx.start_at(0, "Spain", "Brazil");

    let cases = [
        ("", "Poland", GameRule::BlankTeamName(Side::Home)),
        ("Poland", "  ", GameRule::BlankTeamName(Side::Away)),
        ("Poland", "Poland", GameRule::SelfMatch),
        (
            "Spain",
            "Poland",
            GameRule::TeamAlreadyPlaying("Spain".to_string()),
        ),
        (
            "Poland",
            "Brazil",
            GameRule::TeamAlreadyPlaying("Brazil".to_string()),
        ),
        (
            "Brazil",
            "Spain",
            GameRule::TeamAlreadyPlaying("Brazil".to_string()),
        ),
    ];

    for (home, away, rule) in cases {
        let result = ctx.scoreboard.start_game(Team::new(home), Team::new(away));

        assert_eq!(result.unwrap_err(), AppError::RuleViolation(rule));
        assert_eq!(ctx.stored_games(), vec![existing.clone()]);
    }
}

#[test]
fn test_already_playing_check_is_case_sensitive() {
    let ctx = setup();
    ctx.start_at(0, "Spain", "Brazil");

    let result = ctx
        .scoreboard
        .start_game(Team::new("spain"), Team::new("Portugal"));

    assert!(result.is_ok());
}

#[test]
fn test_team_can_play_again_after_finish() {
    let ctx = setup();
    let game = ctx.start_at(0, "Spain", "Brazil");

    ctx.scoreboard.finish_game(game.id).unwrap();

    assert!(
        ctx.scoreboard
            .start_game(Team::new("Brazil"), Team::new("Spain"))
            .is_ok()
    );
}

#[test]
fn test_finish_game_removes_it() {
    let ctx = setup();
    let game = ctx.start_at(0, "Germany", "France");

    ctx.scoreboard.finish_game(game.id).unwrap();

    assert!(ctx.repository.find_by_id(game.id).is_none());
    assert!(ctx.scoreboard.get_summary().is_empty());
}

#[test]
fn test_finish_unknown_game_leaves_store_unchanged() {
    let ctx = setup();
    let game = ctx.start_at(0, "Germany", "France");

    let unknown = GameId::generate();
    let result = ctx.scoreboard.finish_game(unknown);

    assert_eq!(result.unwrap_err(), AppError::NotFound { id: unknown });
    assert_eq!(ctx.stored_games(), vec![game]);
}

#[test]
fn test_finish_game_twice() {
    let ctx = setup();
    let game = ctx.start_at(0, "Germany", "France");

    assert!(ctx.scoreboard.finish_game(game.id).is_ok());
    assert_eq!(
        ctx.scoreboard.finish_game(game.id).unwrap_err(),
        AppError::NotFound { id: game.id }
    );
}

#[test]
fn test_update_score_replaces_entirely() {
    let ctx = setup();
    let game = ctx.start_at(0, "Germany", "France");

    ctx.scoreboard
        .update_score(game.id, Score::new(2, 1))
        .unwrap();
    let updated = ctx
        .scoreboard
        .update_score(game.id, Score::new(0, 0))
        .unwrap();

    assert_eq!(updated.score, Score::new(0, 0));
    assert_eq!(updated.id, game.id);
    assert_eq!(updated.created_at, game.created_at);
    assert_eq!(
        ctx.repository.find_by_id(game.id).unwrap().score,
        Score::new(0, 0)
    );
}

#[test]
fn test_update_score_does_not_touch_callers_copy() {
    let ctx = setup();
    let game = ctx.start_at(0, "Germany", "France");

    ctx.scoreboard
        .update_score(game.id, Score::new(3, 3))
        .unwrap();

    assert_eq!(game.score, Score::zero());
}

#[test]
fn test_negative_score_rejected_regardless_of_id() {
    let ctx = setup();
    let game = ctx.start_at(0, "Germany", "France");

    for id in [game.id, GameId::generate()] {
        assert_eq!(
            ctx.scoreboard
                .update_score(id, Score::new(-1, 0))
                .unwrap_err(),
            AppError::RuleViolation(GameRule::NegativeScore(Side::Home))
        );
        assert_eq!(
            ctx.scoreboard
                .update_score(id, Score::new(0, -1))
                .unwrap_err(),
            AppError::RuleViolation(GameRule::NegativeScore(Side::Away))
        );
    }

    assert_eq!(
        ctx.repository.find_by_id(game.id).unwrap().score,
        Score::zero()
    );
}

#[test]
fn test_update_unknown_game() {
    let ctx = setup();

    let unknown = GameId::generate();
    let result = ctx.scoreboard.update_score(unknown, Score::new(1, 0));

    assert_eq!(result.unwrap_err(), AppError::NotFound { id: unknown });
}

#[test]
fn test_summary_order() {
    let ctx = setup();

    let a = ctx.start_at(1, "A1", "A2");
    let b = ctx.start_at(2, "B1", "B2");
    let c = ctx.start_at(1, "C1", "C2");
    let d = ctx.start_at(2, "D1", "D2");

    let a = ctx.scoreboard.update_score(a.id, Score::new(1, 1)).unwrap();
    let b = ctx.scoreboard.update_score(b.id, Score::new(2, 1)).unwrap();
    let c = ctx.scoreboard.update_score(c.id, Score::new(0, 3)).unwrap();
    let d = ctx.scoreboard.update_score(d.id, Score::new(3, 3)).unwrap();

    assert_eq!(ctx.scoreboard.get_summary(), vec![d, c, b, a]);
}

#[test]
fn test_summary_is_repeatable() {
    let ctx = setup();

    for (second, (home, away)) in [("A", "B"), ("C", "D"), ("E", "F"), ("G", "H")]
        .into_iter()
        .enumerate()
    {
        ctx.start_at(second as i64 % 2, home, away);
    }

    let first = ctx.scoreboard.get_summary();
    for _ in 0..10 {
        assert_eq!(ctx.scoreboard.get_summary(), first);
    }
}

#[test]
fn test_started_game_round_trips_into_summary() {
    let ctx = setup();

    let game = ctx.start_at(0, "Argentina", "Australia");
    let summary = ctx.scoreboard.get_summary();

    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0], game);
}

#[test]
fn test_concurrent_starts_for_same_team() {
    let ctx = setup();
    let scoreboard = ctx.scoreboard.clone();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let scoreboard = scoreboard.clone();
            thread::spawn(move || {
                scoreboard.start_game(Team::new("Spain"), Team::new(format!("Opponent {i}")))
            })
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(Result::is_ok)
        .count();

    assert_eq!(successes, 1);
    assert_eq!(ctx.repository.find_all().len(), 1);
}

#[test]
fn test_services_sharing_one_store() {
    let repository = Arc::new(InMemoryGameRepository::new());
    let first = ScoreboardService::new(Arc::clone(&repository), Arc::new(SystemClock));
    let second = ScoreboardService::new(
        Arc::clone(&repository),
        Arc::new(FixedClock::new(kick_off())),
    );

    let game = first
        .start_game(Team::new("Uruguay"), Team::new("Italy"))
        .unwrap();

    assert_eq!(
        second
            .start_game(Team::new("Italy"), Team::new("Chile"))
            .unwrap_err(),
        AppError::RuleViolation(GameRule::TeamAlreadyPlaying("Italy".to_string()))
    );

    second.finish_game(game.id).unwrap();
    assert!(first.get_summary().is_empty());
}

#[test]
fn test_separate_services_never_double_book_a_team() {
    const SERVICES: usize = 8;

    for _ in 0..200 {
        let repository = Arc::new(InMemoryGameRepository::new());
        let barrier = Arc::new(Barrier::new(SERVICES));

        let handles: Vec<_> = (0..SERVICES)
            .map(|i| {
                let scoreboard =
                    ScoreboardService::new(Arc::clone(&repository), Arc::new(SystemClock));
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    scoreboard.start_game(Team::new("Spain"), Team::new(format!("Opponent {i}")))
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(Result::is_ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(
            repository
                .find_all()
                .iter()
                .filter(|game| game.involves("Spain"))
                .count(),
            1
        );
    }
}

#[test]
fn test_finish_from_other_service_is_not_undone_by_update() {
    for _ in 0..200 {
        let repository = Arc::new(InMemoryGameRepository::new());
        let finisher = ScoreboardService::new(Arc::clone(&repository), Arc::new(SystemClock));
        let updater = ScoreboardService::new(Arc::clone(&repository), Arc::new(SystemClock));

        let game = finisher
            .start_game(Team::new("Germany"), Team::new("France"))
            .unwrap();
        let barrier = Arc::new(Barrier::new(2));

        let finish = {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                finisher.finish_game(game.id)
            })
        };
        let update = {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                updater.update_score(game.id, Score::new(1, 0))
            })
        };

        assert!(finish.join().unwrap().is_ok());
        let _ = update.join().unwrap();

        assert!(repository.find_by_id(game.id).is_none());
    }
}
