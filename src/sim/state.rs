//! Run state and world bootstrap
//!
//! [`GameState::new`] is the world-setup contract: fixed viewport, zero
//! default gravity, bird centered, tiled floor/background, start overlay.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::physics::{BodyId, RigidBody, World};
use crate::tuning::Tuning;

/// Current phase of a run
///
/// `Idle` -(first flap)-> `Running` -(bird collision)-> `Ended`. A reset
/// replaces the whole state with a fresh `Idle` world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Pre-start pause: the bird holds its idle coordinate, nothing scrolls
    Idle,
    /// Active run
    Running,
    /// Run over; frozen until the host swaps in a fresh world
    Ended,
}

/// One pipe pair the bird must pass through
///
/// Two vertically-offset static bodies sharing an x-coordinate, indexed by
/// the spawn ordinal rather than an ad hoc string key.
#[derive(Debug, Clone)]
pub struct ObstaclePair {
    /// Spawn ordinal, unique and strictly increasing within a run
    pub id: u32,
    pub top: BodyId,
    pub bottom: BodyId,
    /// Set once the bird has crossed this pair's center
    pub scored: bool,
}

/// Complete simulation state for one run
#[derive(Debug)]
pub struct GameState {
    pub(crate) world: World,
    pub(crate) phase: GamePhase,
    pub(crate) rng: Pcg32,
    pub(crate) tuning: Tuning,

    pub(crate) bird: BodyId,
    pub(crate) floor: [BodyId; 2],
    pub(crate) background: [BodyId; 2],
    pub(crate) start_overlay: BodyId,
    pub(crate) obstacles: Vec<ObstaclePair>,

    /// Total pairs spawned this run; doubles as the next pair id
    pub(crate) pipes_spawned: u32,
    /// Wing animation frame (1-based, matches the sprite sheet)
    pub(crate) pose: u8,
}

/// The bird's idle coordinate, held until the first flap
pub(crate) const BIRD_IDLE_POS: Vec2 = Vec2::new(VIEWPORT_WIDTH / 2.0, VIEWPORT_HEIGHT / 2.0);

impl GameState {
    /// Deterministically construct a fresh world
    ///
    /// Gravity starts at zero; the frame update applies it to the bird only
    /// once a run is underway. Background tiles and the start overlay are
    /// scenery: they lay out like bodies but never produce contacts.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut world = World::new();
        world.gravity = Vec2::ZERO;

        let bird = world.add(RigidBody::new(
            BIRD_IDLE_POS,
            Vec2::new(BIRD_WIDTH, BIRD_HEIGHT),
        ));

        // Two tiles each, the second starting one viewport-width to the
        // right, so the seam stays covered while scrolling
        let floor_size = Vec2::new(VIEWPORT_WIDTH, FLOOR_HEIGHT);
        let floor_y = VIEWPORT_HEIGHT - FLOOR_HEIGHT / 2.0;
        let floor = [
            world.add(RigidBody::new_static(
                Vec2::new(VIEWPORT_WIDTH / 2.0, floor_y),
                floor_size,
            )),
            world.add(RigidBody::new_static(
                Vec2::new(VIEWPORT_WIDTH * 1.5, floor_y),
                floor_size,
            )),
        ];

        let sky_size = Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
        let sky_center = Vec2::new(VIEWPORT_WIDTH / 2.0, VIEWPORT_HEIGHT / 2.0);
        let background = [
            world.add(RigidBody::new_scenery(sky_center, sky_size)),
            world.add(RigidBody::new_scenery(
                Vec2::new(VIEWPORT_WIDTH * 1.5, VIEWPORT_HEIGHT / 2.0),
                sky_size,
            )),
        ];

        let start_overlay = world.add(RigidBody::new_scenery(
            sky_center,
            Vec2::new(VIEWPORT_WIDTH - 40.0, VIEWPORT_HEIGHT - 40.0),
        ));

        Self {
            world,
            phase: GamePhase::Idle,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            bird,
            floor,
            background,
            start_overlay,
            obstacles: Vec::new(),
            pipes_spawned: 0,
            pose: 1,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn tuning(&self) -> Tuning {
        self.tuning
    }

    pub fn bird(&self) -> BodyId {
        self.bird
    }

    pub fn floor(&self) -> [BodyId; 2] {
        self.floor
    }

    pub fn background(&self) -> [BodyId; 2] {
        self.background
    }

    pub fn start_overlay(&self) -> BodyId {
        self.start_overlay
    }

    pub fn obstacles(&self) -> &[ObstaclePair] {
        &self.obstacles
    }

    /// Total pairs spawned so far this run
    pub fn pipes_spawned(&self) -> u32 {
        self.pipes_spawned
    }

    /// Current wing pose for the bird sprite
    pub fn bird_pose(&self) -> u8 {
        self.pose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_setup_contract() {
        let state = GameState::new(7, Tuning::default());

        assert_eq!(state.phase(), GamePhase::Idle);
        assert_eq!(state.world.gravity, Vec2::ZERO);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.pipes_spawned, 0);

        // One bird, two floor tiles, two background tiles, one overlay
        assert_eq!(state.world.len(), 6);
        assert!(!state.world.body(state.bird).is_static);
        assert_eq!(state.world.body(state.bird).pos, BIRD_IDLE_POS);
    }

    #[test]
    fn test_tiles_start_edge_to_edge() {
        let state = GameState::new(7, Tuning::default());

        for pair in [state.floor, state.background] {
            let first = state.world.body(pair[0]).aabb();
            let second = state.world.body(pair[1]).aabb();
            assert_eq!(first.max.x, second.min.x);
        }
    }

    #[test]
    fn test_scenery_is_not_solid() {
        let state = GameState::new(7, Tuning::default());

        for id in state.background {
            assert!(!state.world.body(id).solid);
        }
        assert!(!state.world.body(state.start_overlay).solid);
        // Floor and bird do collide
        assert!(state.world.body(state.floor[0]).solid);
        assert!(state.world.body(state.bird).solid);
    }

    #[test]
    fn test_same_seed_spawns_the_same_gaps() {
        use crate::sim::tick::{TickInput, tick};

        let mut a = GameState::new(42, Tuning::default());
        let mut b = GameState::new(42, Tuning::default());
        tick(&mut a, TickInput { flap: true }, crate::consts::SIM_DT);
        tick(&mut b, TickInput { flap: true }, crate::consts::SIM_DT);

        let gap_a = a.world.body(a.obstacles[0].top).aabb().max.y;
        let gap_b = b.world.body(b.obstacles[0].top).aabb().max.y;
        assert_eq!(gap_a, gap_b);
    }
}
