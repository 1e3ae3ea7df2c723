//! Clock abstraction used to timestamp new games.

use chrono::{DateTime, Utc};

/// Source of the current time.
///
/// Injected into the scoreboard so tests can pin or step time. Implementations
/// live in [`crate::infrastructure::clock`].
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}
