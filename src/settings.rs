//! Host settings and preferences
//!
//! Persisted as JSON in the working directory. Simulation tuning lives in
//! [`crate::consts`]; these only shape how a session is hosted.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Host/session preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed; `None` seeds from the clock at startup
    pub seed: Option<u64>,
    /// End-of-frame pacing delay in milliseconds
    pub tick_delay_ms: u64,
    /// Session length in ticks for the self-driving demo host
    pub demo_ticks: u64,
    /// Ticks between HUD summary log lines
    pub hud_log_period_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            tick_delay_ms: crate::consts::TICK_DELAY_MS,
            demo_ticks: 3600,
            hud_log_period_ticks: 120,
        }
    }
}

impl Settings {
    /// Settings file name, looked up in the working directory.
    const FILE_NAME: &'static str = "asterfall_settings.json";

    /// Load settings, falling back to defaults on a missing or corrupt file.
    /// Corruption is never fatal.
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring corrupt settings file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Persist the current settings; failures are logged, never fatal.
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(Self::FILE_NAME, json) {
                    log::warn!("Failed to save settings: {err}");
                }
            }
            Err(err) => log::warn!("Failed to serialize settings: {err}"),
        }
    }
}
