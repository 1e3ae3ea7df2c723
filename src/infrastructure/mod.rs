//! Infrastructure layer for the scoreboard collaborators.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`clock`] - System, fixed and manual clocks
//! - [`persistence`] - In-memory game repository

pub mod clock;
pub mod persistence;
