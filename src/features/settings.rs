//! Application settings persistence
//!
//! Tuning knobs for the control and where to find the background image.
//! The volume level itself is deliberately not stored here.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::volume::{DEFAULT_DAMPENING_FACTOR, Geometry};

/// Default background lookup, relative to the working directory
pub const DEFAULT_BACKGROUND: &str = "assets/background.png";

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Background image, `None` uses `assets/background.png`
    pub background_path: Option<PathBuf>,
    /// Gaussian blur sigma applied to the background
    pub background_blur: f32,
    /// Overscroll dampening factor
    pub dampening_factor: f32,
    /// Duration of the release spring-back in milliseconds
    pub settle_duration_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background_path: None,
            background_blur: 10.0,
            dampening_factor: DEFAULT_DAMPENING_FACTOR,
            settle_duration_ms: 350,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "liquid-volume", "LiquidVolume")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };
        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::debug!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }

    /// Resolved background image location
    pub fn background(&self) -> PathBuf {
        self.background_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BACKGROUND))
    }

    pub fn geometry(&self) -> Geometry {
        Geometry::default().with_dampening(self.dampening_factor)
    }

    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_duration_ms)
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("liquid-volume-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_file("roundtrip.json");
        let settings = Settings {
            background_path: Some(PathBuf::from("/tmp/wallpaper.jpg")),
            background_blur: 4.0,
            dampening_factor: 6.0,
            settle_duration_ms: 500,
        };

        settings.save_to_file(&path).expect("save should succeed");
        let loaded = Settings::load_from_file(&path).expect("load should succeed");
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let path = temp_file("partial.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{ "settle_duration_ms": 120 }"#).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded.settle_duration(), Duration::from_millis(120));
        assert_eq!(loaded.dampening_factor, DEFAULT_DAMPENING_FACTOR);
        assert_eq!(loaded.background(), PathBuf::from(DEFAULT_BACKGROUND));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_and_malformed_files() {
        let missing = temp_file("does-not-exist.json");
        assert!(matches!(
            Settings::load_from_file(&missing),
            Err(SettingsError::Io(_))
        ));

        let bad = temp_file("bad.json");
        std::fs::create_dir_all(bad.parent().unwrap()).unwrap();
        std::fs::write(&bad, "{ not json").unwrap();
        assert!(matches!(
            Settings::load_from_file(&bad),
            Err(SettingsError::Parse(_))
        ));

        let _ = std::fs::remove_file(&bad);
    }

    #[test]
    fn test_geometry_falls_back_on_bad_dampening() {
        let settings = Settings {
            dampening_factor: -2.0,
            ..Default::default()
        };
        assert_eq!(
            settings.geometry().dampening_factor,
            DEFAULT_DAMPENING_FACTOR
        );
        assert_eq!(settings.geometry().height, 158.0);
    }
}
