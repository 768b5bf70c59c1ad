//! Arcade settings and preferences
//!
//! Persisted as JSON next to the score file. Missing or malformed files fall
//! back to defaults; missing fields take their default values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ScreenSize;

/// Default location of the score file
pub const DEFAULT_SCORES_PATH: &str = "Players.txt";

/// Arcade settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeSettings {
    /// Playfield size in pixels
    pub screen: ScreenSize,
    /// Session RNG seed (random when unset)
    pub seed: Option<u64>,
    /// Flat score file location
    pub scores_path: PathBuf,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for ArcadeSettings {
    fn default() -> Self {
        Self {
            screen: ScreenSize::default(),
            seed: None,
            scores_path: PathBuf::from(DEFAULT_SCORES_PATH),

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl ArcadeSettings {
    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("Using default settings ({}: {})", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str::<ArcadeSettings>(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON (best effort)
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => match std::fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(e) => log::warn!("Could not save settings to {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not serialize settings: {}", e),
        }
    }

    /// Clamp volumes and reject degenerate screens
    fn sanitized(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        if self.screen.width <= 0 || self.screen.height <= 0 {
            log::warn!("Screen {:?} is unusable, using default", self.screen);
            self.screen = ScreenSize::default();
        }
        self
    }
}
