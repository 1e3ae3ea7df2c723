//! Team entity representing a competing side.

use std::fmt;

/// A named competing entity.
///
/// Two teams are equal when their names are equal. Names are compared
/// exactly: no trimming, no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Team {
    pub name: String,
}

impl Team {
    /// Creates a new Team instance.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns true if the name is empty or consists only of whitespace.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
