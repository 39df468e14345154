//! Runtime settings
//!
//! Read from a JSON file; every field is optional and falls back to its
//! default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::sim::Viewport;

/// Default settings file name
pub const SETTINGS_FILE: &str = "settings.json";

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield width in world units
    pub viewport_width: f32,
    /// Playfield height in world units
    pub viewport_height: f32,
    /// Best score file
    pub save_path: String,
    /// Fixed RNG seed (wall-clock when absent)
    pub seed: Option<u64>,
    /// Length of the headless session in seconds (0 = until game over)
    pub demo_seconds: u32,
    /// Headless session presses restart after each game over
    pub auto_restart: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            save_path: "save.json".to_string(),
            seed: None,
            demo_seconds: 30,
            auto_restart: false,
        }
    }
}

impl Settings {
    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.viewport_width,
            height: self.viewport_height,
        }
    }

    /// Parse settings, falling back to defaults on malformed input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Malformed settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Load settings from a file; a missing file means defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path.display());
                Self::from_json(&json)
            }
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}
