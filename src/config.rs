use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Longest pause the computer may take before moving.
pub const MAX_THINK_DELAY_MS: u64 = 10_000;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub opponent: OpponentConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Computer opponent settings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OpponentConfig {
    /// Pause before each computer move, in milliseconds.
    pub think_delay_ms: u64,
    /// Fixed RNG seed; random per run when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for OpponentConfig {
    fn default() -> Self {
        OpponentConfig {
            think_delay_ms: 800,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the computer's remarks after its moves and at game end.
    pub commentary: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { commentary: true }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file; the terminal is reserved for the game.
    pub file: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            file: PathBuf::from("short_connect_four.log"),
            filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.opponent.think_delay_ms > MAX_THINK_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "opponent.think_delay_ms must be <= {MAX_THINK_DELAY_MS}"
            )));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.filter must not be empty".into(),
            ));
        }
        if self.logging.file.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "logging.file must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
