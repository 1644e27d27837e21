//! Per-frame simulation update
//!
//! The host game loop calls [`tick`] once per rendered frame and drains the
//! returned events into run-level state transitions. Only `Running` frames
//! advance scrolling, spawning, and scoring; `Idle` holds the bird at its
//! idle coordinate and `Ended` freezes everything.

use glam::Vec2;
use rand::Rng;

use super::state::{BIRD_IDLE_POS, GamePhase, GameState, ObstaclePair};
use crate::consts::*;
use crate::physics::RigidBody;

/// Input gathered by the host for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// A tap/press registered since the previous frame
    pub flap: bool,
}

/// Events raised by a frame update, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// First flap of a run: the pre-start pause is over
    StartEnd,
    /// The bird passed an obstacle pair's center
    Score,
    /// A collision involving the bird ended the run
    GameOver,
}

impl GameEvent {
    /// Wire name used on the host event channel
    pub fn type_name(&self) -> &'static str {
        match self {
            GameEvent::StartEnd => "start-end",
            GameEvent::Score => "score",
            GameEvent::GameOver => "game-over",
        }
    }
}

/// Advance the simulation by one frame
pub fn tick(state: &mut GameState, input: TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Ended => return events,
        GamePhase::Idle => {
            let bird = state.world.body_mut(state.bird);
            bird.pos = BIRD_IDLE_POS;
            bird.vel = Vec2::ZERO;
            if !input.flap {
                return events;
            }
            // First tap starts the run; the same tap also flaps below
            state.phase = GamePhase::Running;
            events.push(GameEvent::StartEnd);
        }
        GamePhase::Running => {}
    }

    let tuning = state.tuning;

    // Bird: gravity, then the flap impulse as an assignment (a tap sets the
    // vertical velocity outright, it never accumulates)
    {
        let bird = state.world.body_mut(state.bird);
        bird.vel.y += tuning.gravity * dt;
        if input.flap {
            bird.vel.y = tuning.flap_impulse;
        }
        state.pose = if bird.vel.y < 0.0 { 2 } else { 1 };
    }

    // Constant leftward scroll, re-asserted on every obstacle and tile
    let scroll = Vec2::new(-tuning.scroll_speed, 0.0);
    for pair in &state.obstacles {
        state.world.body_mut(pair.top).vel = scroll;
        state.world.body_mut(pair.bottom).vel = scroll;
    }
    for id in state.floor.iter().chain(state.background.iter()) {
        state.world.body_mut(*id).vel = scroll;
    }

    state.world.step(dt);

    wrap_tiles(state);
    spawn_pipes(state);
    despawn_pipes(state);
    score_pairs(state, &mut events);

    // Collision detection itself is the physics layer's job; only contacts
    // involving the bird end the run
    if state.world.contacts().iter().any(|c| c.involves(state.bird)) {
        state.phase = GamePhase::Ended;
        events.push(GameEvent::GameOver);
    }

    events
}

/// Reposition a tile to the right of its sibling once it has fully left the
/// viewport, preserving edge-to-edge continuity
fn wrap_tiles(state: &mut GameState) {
    for pair in [state.floor, state.background] {
        for i in 0..2 {
            let body = state.world.body(pair[i]);
            if body.pos.x + body.half.x > 0.0 {
                continue;
            }
            let sibling = state.world.body(pair[1 - i]);
            let sibling_right = sibling.pos.x + sibling.half.x;
            let body = state.world.body_mut(pair[i]);
            body.pos.x = sibling_right + body.half.x;
        }
    }
}

/// Spawn the next pair once the newest one has advanced past the spawn
/// threshold (a fresh run spawns its first pair immediately)
fn spawn_pipes(state: &mut GameState) {
    let tuning = state.tuning;
    let due = match state.obstacles.last() {
        Some(pair) => {
            state.world.body(pair.top).pos.x <= VIEWPORT_WIDTH - tuning.spawn_interval
        }
        None => true,
    };
    if !due {
        return;
    }

    let gap_center = state
        .rng
        .random_range(tuning.gap_center_min()..=tuning.gap_center_max());

    let playfield_bottom = VIEWPORT_HEIGHT - FLOOR_HEIGHT;
    let top_height = gap_center - tuning.gap_size / 2.0;
    let bottom_top = gap_center + tuning.gap_size / 2.0;
    let bottom_height = playfield_bottom - bottom_top;

    let x = VIEWPORT_WIDTH + PIPE_WIDTH / 2.0;
    let vel = Vec2::new(-tuning.scroll_speed, 0.0);

    let mut top = RigidBody::new_static(
        Vec2::new(x, top_height / 2.0),
        Vec2::new(PIPE_WIDTH, top_height),
    );
    top.vel = vel;
    let mut bottom = RigidBody::new_static(
        Vec2::new(x, bottom_top + bottom_height / 2.0),
        Vec2::new(PIPE_WIDTH, bottom_height),
    );
    bottom.vel = vel;

    let id = state.pipes_spawned;
    state.pipes_spawned += 1;
    let top = state.world.add(top);
    let bottom = state.world.add(bottom);
    state.obstacles.push(ObstaclePair {
        id,
        top,
        bottom,
        scored: false,
    });
    log::debug!("spawned pipe pair {id} (gap center {gap_center:.0})");
}

/// Remove pairs whose right edge has passed the viewport's left edge
fn despawn_pipes(state: &mut GameState) {
    let world = &mut state.world;
    state.obstacles.retain(|pair| {
        let body = world.body(pair.top);
        if body.pos.x + body.half.x > 0.0 {
            return true;
        }
        world.remove(pair.top);
        world.remove(pair.bottom);
        log::debug!("recycled pipe pair {}", pair.id);
        false
    });
}

/// Emit `Score` the first time the bird's x reaches a pair's center
fn score_pairs(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let bird_x = state.world.body(state.bird).pos.x;
    let world = &state.world;
    for pair in state.obstacles.iter_mut() {
        if !pair.scored && world.body(pair.top).pos.x <= bird_x {
            pair.scored = true;
            events.push(GameEvent::Score);
        }
    }
}
