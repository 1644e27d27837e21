//! Sky Flap entry point
//!
//! Runs a headless demo session: a small autopilot plays one run (flapping
//! whenever the bird sinks below the approaching gap), then the score is
//! reported and the max score persisted like any real session.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use sky_flap::consts::*;
use sky_flap::persistence::{FileStore, KvStore, MemoryStore};
use sky_flap::sim::{GamePhase, TickInput};
use sky_flap::{App, Tuning};

fn main() {
    env_logger::init();
    log::info!("sky-flap starting...");

    let tuning = Tuning::load(Path::new("tuning.json"));
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    log::info!("seed {seed}");

    match FileStore::open_default() {
        Ok(store) => run_demo(App::new(seed, tuning, store)),
        Err(e) => {
            log::warn!("storage unavailable ({e}); scores will not persist");
            run_demo(App::new(seed, tuning, MemoryStore::new()));
        }
    }
}

/// Drive one run with the autopilot, one fixed step per frame
fn run_demo<S: KvStore>(mut app: App<S>) {
    let mut frames = 0u32;
    while !app.game_over() && frames < 60 * 120 {
        let input = TickInput {
            flap: autopilot(&app),
        };
        app.frame(input, SIM_DT);
        frames += 1;
    }

    println!("score: {}", app.score());
    if let Some(max) = app.max_score() {
        println!("max score: {max}");
    }
}

/// Flap when the bird is falling below the center of the next gap ahead
fn autopilot<S: KvStore>(app: &App<S>) -> bool {
    let state = app.state();
    if state.phase() == GamePhase::Idle {
        return true;
    }

    let world = state.world();
    let bird = world.body(state.bird());
    let target_y = state
        .obstacles()
        .iter()
        .map(|pair| world.body(pair.top))
        .filter(|top| top.pos.x + top.half.x >= bird.pos.x)
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
        .map(|top| top.aabb().max.y + state.tuning().gap_size / 2.0)
        .unwrap_or(VIEWPORT_HEIGHT / 2.0);

    bird.pos.y > target_y && bird.vel.y >= 0.0
}
