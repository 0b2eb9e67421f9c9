//! User preferences
//!
//! Stored as a small JSON file in the working directory. Any load error
//! falls back to defaults; saving is best-effort.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Music volume, 0.0 (silent) to 1.0
    pub music_volume: f32,
    /// Start the match with music muted
    pub start_muted: bool,
    /// Show the frame-rate readout
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_volume: 0.4,
            start_muted: false,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Settings file name, looked up in the working directory
    pub const FILE: &'static str = "pong_settings.json";

    /// Load settings, falling back to defaults on any error
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE))
    }

    fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("ignoring malformed settings file: {e}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default settings");
                Self::default()
            }
        }
    }

    /// Write settings back, logging instead of failing
    pub fn save(&self) {
        self.save_to(Path::new(Self::FILE));
    }

    fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("could not save settings: {e}");
                }
            }
            Err(e) => log::warn!("could not serialize settings: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = Settings::load_from(Path::new("definitely/not/here.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("pong_settings_malformed_test.json");
        std::fs::write(&path, "{ not json").unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings, Settings::default());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = std::env::temp_dir().join("pong_settings_roundtrip_test.json");
        let settings = Settings {
            music_volume: 0.9,
            start_muted: true,
            show_fps: true,
        };
        settings.save_to(&path);
        assert_eq!(Settings::load_from(&path), settings);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let path = std::env::temp_dir().join("pong_settings_partial_test.json");
        std::fs::write(&path, r#"{ "show_fps": true }"#).unwrap();
        let settings = Settings::load_from(&path);
        assert!(settings.show_fps);
        assert_eq!(settings.music_volume, Settings::default().music_volume);
        let _ = std::fs::remove_file(&path);
    }
}
