//! Minimal rigid-body physics layer
//!
//! The simulation delegates integration and collision detection here.
//! Bodies are axis-aligned boxes in screen coordinates; the world reports
//! "collision start" contacts the step a pair begins to overlap.

pub mod body;
pub mod world;

pub use body::{Aabb, BodyId, RigidBody};
pub use world::{Contact, World};
