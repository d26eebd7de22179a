//! Game settings and preferences
//!
//! Read once at startup from an optional JSON file. Missing fields take their
//! defaults, so a partial file is fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::clamp_speed_multiplier;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Ball speed multiplier (clamped to 0.6 - 1.6)
    pub speed_multiplier: f32,
    /// RNG seed for serve directions; `None` picks one from the clock
    pub seed: Option<u64>,
    /// Let the demo AI steer the paddle
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed_multiplier: 1.0,
            seed: None,
            autopilot: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, clamping out-of-range values
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.speed_multiplier = clamp_speed_multiplier(settings.speed_multiplier).unwrap_or(1.0);
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        // Plain struct of numbers and bools; serialization can't fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Load settings from a file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Seed to use for this run
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}
