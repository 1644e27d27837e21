//! Sky Flap - a side-scrolling flap-the-bird arcade game core
//!
//! Core modules:
//! - `physics`: Minimal rigid-body layer (AABBs, integration, contact reporting)
//! - `sim`: Deterministic simulation (world setup, frame update, run state)
//! - `render`: Pure body-to-rectangle presentation layout
//! - `persistence`: Key-value storage for the max-score scalar
//! - `tuning`: Data-driven gameplay balance

pub mod app;
pub mod highscores;
pub mod persistence;
pub mod physics;
pub mod render;
pub mod sim;
pub mod tuning;

pub use app::App;
pub use highscores::MaxScore;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed timestep used by the demo loop and tests (the host loop
    /// normally supplies its own frame delta)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Viewport dimensions (screen coordinates, +y down)
    pub const VIEWPORT_WIDTH: f32 = 400.0;
    pub const VIEWPORT_HEIGHT: f32 = 700.0;

    /// Bird body size
    pub const BIRD_WIDTH: f32 = 50.0;
    pub const BIRD_HEIGHT: f32 = 40.0;

    /// Floor strip height; each of the two tiles spans one viewport width
    pub const FLOOR_HEIGHT: f32 = 50.0;

    /// Obstacle pipes
    pub const PIPE_WIDTH: f32 = 100.0;
    /// Vertical opening between a pair's top and bottom pipe
    pub const GAP_SIZE: f32 = 200.0;
    /// Shortest pipe stub allowed at either playfield edge
    pub const GAP_MARGIN: f32 = 100.0;

    /// Leftward scroll speed for pipes and tiles, px/s
    pub const SCROLL_SPEED: f32 = 120.0;
    /// Bird gravity, px/s² (+y down)
    pub const GRAVITY: f32 = 1200.0;
    /// Vertical velocity assigned on a flap, px/s (negative = up)
    pub const FLAP_IMPULSE: f32 = -380.0;

    /// Spawn threshold: once the newest pair is this far in from the right
    /// viewport edge, the next pair is created
    pub const SPAWN_INTERVAL: f32 = 250.0;
}
