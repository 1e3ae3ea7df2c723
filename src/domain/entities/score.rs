//! Score value object.

use std::fmt;

/// Running score of a game.
///
/// The type admits negative components so that a caller can submit an
/// invalid score and get a rule violation back; the non-negative invariant
/// is enforced by [`crate::application::services::ScoreboardService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    pub home_team_score: i32,
    pub away_team_score: i32,
}

impl Score {
    /// Creates a new Score instance.
    pub fn new(home_team_score: i32, away_team_score: i32) -> Self {
        Self {
            home_team_score,
            away_team_score,
        }
    }

    /// Score of a freshly started game.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Sum of both components, widened so it cannot overflow.
    pub fn total(&self) -> i64 {
        i64::from(self.home_team_score) + i64::from(self.away_team_score)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home_team_score, self.away_team_score)
    }
}
