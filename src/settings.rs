//! Host settings and preferences
//!
//! Persisted as JSON next to the binary. Only host behavior is configurable;
//! the physics constants are fixed at compile time.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Host settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Feedback ===
    /// Emit a bump cue on every collision (the cabinet's bell)
    pub bell: bool,

    // === Players ===
    /// Let the autopilot drive the left paddle
    pub autopilot_left: bool,
    /// Let the autopilot drive the right paddle
    pub autopilot_right: bool,

    // === Run ===
    /// Ticks to run before exiting (0 = until interrupted)
    pub run_ticks: u64,
    /// Log a state snapshot every N ticks (0 = never)
    pub snapshot_every: u64,
    /// Dump the final match state as JSON on exit
    pub print_final_snapshot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bell: true,

            autopilot_left: true,
            autopilot_right: true,

            // One minute of play at 60 Hz
            run_ticks: 60 * 60,
            snapshot_every: 0,
            print_final_snapshot: true,
        }
    }
}

impl Settings {
    /// Parse settings; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {} - using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Malformed settings {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to `path`
    pub fn save(&self, path: &Path) {
        let result = self
            .to_json()
            .map_err(std::io::Error::from)
            .and_then(|json| std::fs::write(path, json));

        match result {
            Ok(()) => log::info!("Settings saved to {}", path.display()),
            Err(e) => log::warn!("Failed to save settings to {}: {}", path.display(), e),
        }
    }

    /// Either paddle driven by the autopilot
    pub fn any_autopilot(&self) -> bool {
        self.autopilot_left || self.autopilot_right
    }
}
