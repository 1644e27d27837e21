//! Deterministic gameplay simulation
//!
//! All run logic lives here. This module must stay deterministic:
//! - dt comes from the host loop, randomness from a seeded RNG
//! - collision detection is delegated to `physics`
//! - events flow out as return values, never through captured callbacks

pub mod state;
pub mod tick;

pub use state::{GamePhase, GameState, ObstaclePair};
pub use tick::{GameEvent, TickInput, tick};
