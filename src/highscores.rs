//! Max-score tracking
//!
//! A single nullable integer, persisted as a base-10 string under one key
//! and updated only when a finished run beats it.

use crate::persistence::KvStore;

/// Storage key for the persisted maximum
pub const MAX_SCORE_KEY: &str = "max_score";

/// The best score seen across runs, if any run has finished yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaxScore(Option<u32>);

impl MaxScore {
    /// Load from storage
    ///
    /// A missing key, an unreadable store, or an unparseable value all read
    /// as "no max score yet"; the last two are logged.
    pub fn load(store: &dyn KvStore) -> Self {
        match store.get(MAX_SCORE_KEY) {
            Ok(Some(raw)) => match raw.parse::<u32>() {
                Ok(value) => MaxScore(Some(value)),
                Err(_) => {
                    log::warn!("ignoring malformed stored max score {raw:?}");
                    MaxScore(None)
                }
            },
            Ok(None) => MaxScore(None),
            Err(e) => {
                log::warn!("max score unavailable: {e}");
                MaxScore(None)
            }
        }
    }

    /// Persist `score` if it beats the current maximum
    ///
    /// Fire-and-forget: a failed write is logged and dropped, but the
    /// in-memory maximum still advances so the session stays consistent.
    pub fn record(&mut self, store: &mut dyn KvStore, score: u32) {
        if self.0.is_some_and(|best| score <= best) {
            return;
        }
        if let Err(e) = store.set(MAX_SCORE_KEY, &score.to_string()) {
            log::warn!("failed to persist max score: {e}");
        }
        self.0 = Some(score);
    }

    pub fn get(&self) -> Option<u32> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_absent_value_loads_as_none() {
        let store = MemoryStore::new();
        assert_eq!(MaxScore::load(&store).get(), None);
    }

    #[test]
    fn test_malformed_value_loads_as_none() {
        let mut store = MemoryStore::new();
        store.set(MAX_SCORE_KEY, "twelve").unwrap();
        assert_eq!(MaxScore::load(&store).get(), None);
    }

    #[test]
    fn test_record_only_improvements() {
        let mut store = MemoryStore::new();
        store.set(MAX_SCORE_KEY, "12").unwrap();

        // A better run advances the stored value...
        let mut max = MaxScore::load(&store);
        max.record(&mut store, 15);
        assert_eq!(max.get(), Some(15));
        assert_eq!(MaxScore::load(&store).get(), Some(15));

        // ...a worse one leaves it alone
        let mut max = MaxScore::load(&store);
        max.record(&mut store, 5);
        assert_eq!(max.get(), Some(15));
        assert_eq!(store.get(MAX_SCORE_KEY).unwrap().as_deref(), Some("15"));
    }

    #[test]
    fn test_first_finished_run_sets_the_value() {
        let mut store = MemoryStore::new();
        let mut max = MaxScore::load(&store);
        max.record(&mut store, 0);
        assert_eq!(max.get(), Some(0));
        assert_eq!(store.get(MAX_SCORE_KEY).unwrap().as_deref(), Some("0"));
    }

    #[test]
    fn test_survives_simulated_restart() {
        let mut store = MemoryStore::new();

        let mut max = MaxScore::load(&store);
        max.record(&mut store, 12);
        drop(max);

        // "Restart": reload from the same store
        let max = MaxScore::load(&store);
        assert_eq!(max.get(), Some(12));
    }
}
