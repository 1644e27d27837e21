//! Data-driven gameplay balance
//!
//! Defaults mirror [`consts`](crate::consts); a JSON file can override any
//! subset of them without a rebuild. Load failures fall back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay balance knobs
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Leftward scroll speed for pipes and tiles, px/s
    pub scroll_speed: f32,
    /// Bird gravity, px/s² (+y down)
    pub gravity: f32,
    /// Vertical velocity assigned on a flap, px/s (negative = up)
    pub flap_impulse: f32,
    /// Vertical opening between a pair's pipes
    pub gap_size: f32,
    /// Shortest pipe stub allowed at either playfield edge
    pub gap_margin: f32,
    /// Spawn threshold measured in from the right viewport edge
    pub spawn_interval: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            scroll_speed: SCROLL_SPEED,
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            gap_size: GAP_SIZE,
            gap_margin: GAP_MARGIN,
            spawn_interval: SPAWN_INTERVAL,
        }
    }
}

impl Tuning {
    /// Lowest legal gap center
    pub fn gap_center_min(&self) -> f32 {
        self.gap_margin + self.gap_size / 2.0
    }

    /// Highest legal gap center (the playfield stops at the floor strip)
    pub fn gap_center_max(&self) -> f32 {
        VIEWPORT_HEIGHT - FLOOR_HEIGHT - self.gap_margin - self.gap_size / 2.0
    }

    /// Load overrides from a JSON file, falling back to defaults
    ///
    /// A missing file is the normal case and stays silent; a malformed one
    /// is logged and ignored.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("ignoring malformed tuning file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gap_bounds_are_ordered() {
        let tuning = Tuning::default();
        assert!(tuning.gap_center_min() < tuning.gap_center_max());
        assert!(tuning.gap_center_min() > 0.0);
        assert!(tuning.gap_center_max() < VIEWPORT_HEIGHT - FLOOR_HEIGHT);
    }

    #[test]
    fn test_partial_override_keeps_remaining_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{"scroll_speed": 200.0}"#).unwrap();
        assert_eq!(tuning.scroll_speed, 200.0);
        assert_eq!(tuning.gravity, GRAVITY);
        assert_eq!(tuning.gap_size, GAP_SIZE);
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let tuning = Tuning::load(Path::new("/nonexistent/tuning.json"));
        assert_eq!(tuning.scroll_speed, SCROLL_SPEED);
    }
}
