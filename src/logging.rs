//! Diagnostics go to a log file so they never tear up the terminal UI.

use std::fs::File;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` when set and valid, else the configured one.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

/// Install the global subscriber writing to `config.file`.
///
/// Returns `Ok(false)` when a subscriber was already installed.
pub fn init(config: &LoggingConfig) -> std::io::Result<bool> {
    let log_file = File::create(&config.file)?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .is_ok();
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_to_file_and_tolerates_reinit() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            file: dir.path().join("game.log"),
            filter: "debug".into(),
        };

        let first = init(&config).unwrap();
        let second = init(&config).unwrap();
        assert!(config.file.exists());
        // Only one global subscriber can ever be installed per process.
        assert!(!(first && second));
    }

    #[test]
    fn test_init_fails_for_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            file: dir.path().join("missing").join("game.log"),
            filter: "info".into(),
        };
        assert!(init(&config).is_err());
    }
}
