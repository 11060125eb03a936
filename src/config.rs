use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::MAX_IMPORT_SIZE;
use crate::color::Color;
use crate::command::{DEFAULT_DEBOUNCE_MS, HistoryPolicy};
use crate::error::EditorError;
use crate::picture::Picture;
use crate::state::{AppState, DEFAULT_TOOL};

/// Environment variable naming the configuration file
pub const CONFIG_ENV_VAR: &str = "PIXEL_EDITOR_CONFIG";
/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "pixel_editor.json";

/// Errors that can occur while loading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Start-up settings for the editor. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Fill color of a new picture
    pub background: Color,
    /// Initial painting color
    pub color: Color,
    /// Initial tool name
    pub tool: String,
    /// Screen pixels per cell
    pub scale: f32,
    /// Checkpoint coalescing window in milliseconds
    pub debounce_ms: u64,
    /// Largest imported width or height
    pub max_import_size: usize,
    /// Maximum number of undo steps, unlimited when unset
    pub history_limit: Option<usize>,
    /// Where the save button writes the PNG
    pub export_path: PathBuf,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width: 70,
            height: 50,
            background: Color::CANVAS,
            color: Color::BLACK,
            tool: DEFAULT_TOOL.to_owned(),
            scale: 10.0,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            max_import_size: MAX_IMPORT_SIZE,
            history_limit: None,
            export_path: PathBuf::from("pixelart.png"),
        }
    }
}

impl EditorConfig {
    /// Read a configuration file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration file, falling back to defaults if it doesn't exist
    pub fn load_or_default(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let config = Self::load(path)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid size {}x{} must be positive",
                self.width, self.height
            )));
        }
        if !(self.scale > 0.0) {
            return Err(ConfigError::Invalid(format!("scale {} must be positive", self.scale)));
        }
        if self.max_import_size == 0 {
            return Err(ConfigError::Invalid("max_import_size must be positive".to_owned()));
        }
        if self.history_limit == Some(0) {
            return Err(ConfigError::Invalid("history_limit must be positive when set".to_owned()));
        }
        Ok(())
    }

    pub fn history_policy(&self) -> HistoryPolicy {
        HistoryPolicy {
            debounce_ms: self.debounce_ms,
            max_depth: self.history_limit,
        }
    }

    /// The state a new session starts from: a blank picture and no history
    pub fn initial_state(&self) -> Result<AppState, EditorError> {
        let picture = Picture::empty(self.width, self.height, self.background)?;
        Ok(AppState::new(picture)
            .with_tool(self.tool.clone())
            .with_color(self.color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_start_state() {
        let state = EditorConfig::default().initial_state().unwrap();
        assert_eq!(state.tool, "draw");
        assert_eq!(state.color, Color::BLACK);
        assert_eq!(state.picture.width(), 70);
        assert_eq!(state.picture.height(), 50);
        assert!(state.picture.pixels().iter().all(|c| *c == Color::CANVAS));
        assert!(state.done.is_empty());
        assert_eq!(state.done_at, None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: EditorConfig =
            serde_json::from_str(r##"{ "width": 16, "background": "#ffffff" }"##).unwrap();
        assert_eq!(config.width, 16);
        assert_eq!(config.height, 50);
        assert_eq!(config.background, Color::WHITE);
        assert_eq!(config.debounce_ms, 1000);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = EditorConfig {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = EditorConfig {
            scale: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = EditorConfig {
            history_limit: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = EditorConfig {
            width: 12,
            history_limit: Some(20),
            ..Default::default()
        };
        config.save(&path).unwrap();
        assert_eq!(EditorConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = EditorConfig::load_or_default(dir.path().join("missing.json")).unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(EditorConfig::load(&path), Err(ConfigError::Parse(_))));
    }
}
