//! Host-side glue: event drain, score state, reset
//!
//! Owns what the surrounding application owns: the running score, the
//! loaded max score, and the reset flow that swaps in a fresh world in one
//! step. Storage is only ever touched from here, between frames.

use crate::highscores::MaxScore;
use crate::persistence::KvStore;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use crate::tuning::Tuning;

/// The host application: simulation state plus run-level bookkeeping
pub struct App<S: KvStore> {
    state: GameState,
    tuning: Tuning,
    score: u32,
    max_score: MaxScore,
    store: S,
    seed: u64,
}

impl<S: KvStore> App<S> {
    /// Load the persisted max score and build the first world
    pub fn new(seed: u64, tuning: Tuning, store: S) -> Self {
        let max_score = MaxScore::load(&store);
        Self {
            state: GameState::new(seed, tuning),
            tuning,
            score: 0,
            max_score,
            store,
            seed,
        }
    }

    /// Run one frame and fold its events into host state
    pub fn frame(&mut self, input: TickInput, dt: f32) {
        for event in tick(&mut self.state, input, dt) {
            self.on_event(event);
        }
    }

    fn on_event(&mut self, event: GameEvent) {
        log::debug!("event {}", event.type_name());
        match event {
            GameEvent::StartEnd => log::info!("run started"),
            GameEvent::Score => self.score += 1,
            GameEvent::GameOver => {
                log::info!("game over at score {}", self.score);
                // Fire-and-forget; a failed write never touches the counter
                self.max_score.record(&mut self.store, self.score);
            }
        }
    }

    /// Swap in a freshly constructed world; no partial state is observable
    pub fn reset(&mut self) {
        self.seed = self.seed.wrapping_add(1);
        self.state = GameState::new(self.seed, self.tuning);
        self.score = 0;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Best score across runs, if any run has finished (drives the
    /// max-score display, which is omitted when absent)
    pub fn max_score(&self) -> Option<u32> {
        self.max_score.get()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn game_over(&self) -> bool {
        self.state.phase() == GamePhase::Ended
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::highscores::MAX_SCORE_KEY;
    use crate::persistence::MemoryStore;

    fn run_until_over<S: KvStore>(app: &mut App<S>, flap_first: bool) {
        if flap_first {
            app.frame(TickInput { flap: true }, SIM_DT);
        }
        for _ in 0..1200 {
            if app.game_over() {
                return;
            }
            app.frame(TickInput::default(), SIM_DT);
        }
        panic!("run never ended");
    }

    #[test]
    fn test_game_over_records_max_score() {
        let mut app = App::new(1, Tuning::default(), MemoryStore::new());
        assert_eq!(app.max_score(), None);

        run_until_over(&mut app, true);
        assert!(app.game_over());
        assert_eq!(app.max_score(), Some(app.score()));
    }

    #[test]
    fn test_worse_run_keeps_stored_max() {
        let mut store = MemoryStore::new();
        store.set(MAX_SCORE_KEY, "12").unwrap();

        let mut app = App::new(1, Tuning::default(), store);
        assert_eq!(app.max_score(), Some(12));

        // An un-flapped run scores 0 and must not regress the maximum
        run_until_over(&mut app, true);
        assert_eq!(app.score(), 0);
        assert_eq!(app.max_score(), Some(12));
    }

    #[test]
    fn test_reset_restores_a_fresh_world() {
        let mut app = App::new(1, Tuning::default(), MemoryStore::new());
        run_until_over(&mut app, true);
        let max_before = app.max_score();

        app.reset();
        assert_eq!(app.score(), 0);
        assert!(!app.game_over());
        assert_eq!(app.state().phase(), GamePhase::Idle);
        assert!(app.state().obstacles().is_empty());
        assert_eq!(app.state().pipes_spawned(), 0);
        assert_eq!(app.state().world().len(), 6);
        // The maximum survives the swap
        assert_eq!(app.max_score(), max_before);
    }

    #[test]
    fn test_score_counts_pairs_passed() {
        // Park the bird in a huge gap and let pairs stream past
        let tuning = Tuning {
            gravity: 0.0,
            flap_impulse: 0.0,
            gap_size: 600.0,
            gap_margin: 20.0,
            ..Tuning::default()
        };
        let mut app = App::new(1, tuning, MemoryStore::new());
        app.frame(TickInput { flap: true }, SIM_DT);
        for _ in 0..1800 {
            app.frame(TickInput::default(), SIM_DT);
        }
        assert!(app.score() >= 3);
        assert!(!app.game_over());
    }
}
