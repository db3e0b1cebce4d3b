//! Runtime settings: where clips live, whether to play them, where logs go.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Application settings.
///
/// Every field may be omitted from the TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Directory holding the four sound clips.
    assets_dir: PathBuf,
    /// Skip opening the audio device.
    mute: bool,
    /// File that receives tracing output.
    log_file: PathBuf,
    /// Game timer period in milliseconds.
    tick_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            mute: false,
            log_file: PathBuf::from("tictactoe_tui.log"),
            tick_ms: 1000,
        }
    }
}

/// Values given on the command line, each overriding the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--assets-dir`.
    pub assets_dir: Option<PathBuf>,
    /// `--mute`.
    pub mute: bool,
    /// `--log-file`.
    pub log_file: Option<PathBuf>,
    /// `--tick-ms`.
    pub tick_ms: Option<u64>,
}

impl AppConfig {
    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded");
        Ok(config)
    }

    /// Loads the file if one was given, then applies command-line overrides.
    #[instrument(skip(path, overrides))]
    pub fn resolve(path: Option<&Path>, overrides: Overrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(dir) = overrides.assets_dir {
            config.assets_dir = dir;
        }
        if overrides.mute {
            config.mute = true;
        }
        if let Some(file) = overrides.log_file {
            config.log_file = file;
        }
        if let Some(ms) = overrides.tick_ms {
            config.tick_ms = ms;
        }
        config.validate()?;
        Ok(config)
    }

    /// Game timer period.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::new("tick_ms must be greater than zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = AppConfig::from_toml("").expect("empty config parses");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_partial_file() {
        let config = AppConfig::from_toml("mute = true\nassets_dir = \"sounds\"\n")
            .expect("valid config");
        assert!(*config.mute());
        assert_eq!(config.assets_dir(), &PathBuf::from("sounds"));
        assert_eq!(*config.tick_ms(), 1000);
    }

    #[test]
    fn test_zero_tick_rejected() {
        let err = AppConfig::from_toml("tick_ms = 0").unwrap_err();
        assert!(err.message.contains("tick_ms"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(AppConfig::from_toml("volume = 3").is_err());
    }

    #[test]
    fn test_overrides_win_over_defaults() {
        let config = AppConfig::resolve(
            None,
            Overrides {
                mute: true,
                tick_ms: Some(250),
                ..Overrides::default()
            },
        )
        .expect("valid overrides");
        assert!(*config.mute());
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
    }
}
