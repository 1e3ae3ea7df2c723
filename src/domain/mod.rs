//! Domain layer containing scoreboard entities and collaborator contracts.
//!
//! It defines entities and the interfaces of the collaborators the scoreboard
//! needs, independent of how those collaborators are implemented.
//!
//! # Architecture
//!
//! - [`entities`] - Teams, scores and games
//! - [`repositories`] - Game storage trait
//! - [`clock`] - Time source trait
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Collaborator traits define contracts implemented by infrastructure layer
//! - Business rules are encapsulated in services (see [`crate::application::services`])

pub mod clock;
pub mod entities;
pub mod repositories;
