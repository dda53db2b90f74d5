//! Settings persistence
//!
//! Loads and saves [`Settings`] as JSON. The default file lives in the user's
//! configuration directory, e.g. `~/.config/chess_selfplay/settings.json` on
//! Linux, and falls back to `settings.json` in the working directory when no
//! config directory can be found.
//!
//! # Error Handling
//!
//! [`load_settings`] never fails: a missing or unreadable file means default
//! settings, with a warning logged. [`read_settings`] and [`save_settings`]
//! report errors to the caller.

use super::error::CoreResult;
use chess_engine::EngineConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

const DEFAULT_MAX_PLIES: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub engine: EngineConfig,
    /// Stop a game after this many half-moves
    pub max_plies: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            engine: EngineConfig::default(),
            max_plies: DEFAULT_MAX_PLIES,
        }
    }
}

/// Path of the default settings file
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "chess_selfplay") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read settings from `path`
pub fn read_settings(path: &Path) -> CoreResult<Settings> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Load settings from `path`, falling back to defaults
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return Settings::default();
    }

    match read_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            Settings::default()
        }
    }
}

/// Write settings to `path`, creating its directory if needed
pub fn save_settings(settings: &Settings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, serde_json::to_string_pretty(settings)?)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CoreError;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("chess_selfplay_test_{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_save_then_read() {
        let path = temp_path("round_trip.json");
        let settings = Settings {
            engine: EngineConfig::seeded(99),
            max_plies: 12,
        };

        save_settings(&settings, &path).expect("settings should save");
        assert_eq!(read_settings(&path).expect("settings should load"), settings);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = temp_path("does_not_exist.json");
        assert_eq!(load_settings(&path), Settings::default());
        assert!(matches!(read_settings(&path), Err(CoreError::SettingsIo(_))));
    }

    #[test]
    fn test_corrupt_file_uses_defaults() {
        let path = temp_path("corrupt.json");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("temp dir");
        }
        fs::write(&path, "{ not json").expect("write corrupt file");

        assert!(matches!(
            read_settings(&path),
            Err(CoreError::SettingsSerialization(_))
        ));
        assert_eq!(load_settings(&path), Settings::default());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "max_plies": 30 }"#).expect("partial settings parse");
        assert_eq!(settings.max_plies, 30);
        assert_eq!(settings.engine, EngineConfig::default());
    }
}
