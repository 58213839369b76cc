//! User settings loaded from a JSON file next to the binary

use std::fs::read_to_string;
use std::io::Error as StdError;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

use crate::audio::DEFAULT_VOLUME;
use crate::model::clamp_volume;

pub const SETTINGS_FILE: &str = "tunedeck.json";

#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read the settings file.
    #[error("IO error: {0}")]
    Io(#[from] StdError),
    /// Failed to parse the settings file.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerdeJsonError),
}

/// Serializable user settings with default values.
///
/// Every field is optional in the file; missing fields fall back to the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Volume the audio device starts at, within `[0.0, 1.0]`.
    pub initial_volume: f32,
    /// Optional JSON song catalog replacing the built-in one.
    pub library_path: Option<PathBuf>,
    /// Directory log files are written to.
    pub log_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_volume: DEFAULT_VOLUME,
            library_path: None,
            log_dir: ".logs".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. The initial volume is clamped into
    /// range on load.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = read_to_string(path)?;
        let mut settings: Settings = serde_json::from_str(&content)?;
        settings.initial_volume = clamp_volume(settings.initial_volume);
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is absent or
    /// unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not load settings, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let settings = Settings::default();
        assert_eq!(settings.initial_volume, DEFAULT_VOLUME);
        assert!(settings.library_path.is_none());
        assert_eq!(settings.log_dir, ".logs");
    }

    #[test]
    fn load_reads_partial_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"initial_volume": 0.4}}"#).unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.initial_volume, 0.4);
        assert_eq!(settings.log_dir, ".logs");
    }

    #[test]
    fn load_clamps_initial_volume() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"initial_volume": 5.0}}"#).unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.initial_volume, 1.0);
    }

    #[test]
    fn load_or_default_survives_missing_and_malformed_files() {
        let settings = Settings::load_or_default(Path::new("/nonexistent/tunedeck.json"));
        assert_eq!(settings, Settings::default());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let settings = Settings::load_or_default(file.path());
        assert_eq!(settings, Settings::default());
    }
}
