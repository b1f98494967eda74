use std::path::PathBuf;

use crate::game::{MoveError, Player};

/// Errors raised by a source of moves (console, opponent, script).
#[derive(Debug, thiserror::Error)]
pub enum MoveSourceError {
    #[error("input closed before a move was made")]
    InputClosed,

    #[error("player quit the game")]
    Quit,

    #[error("no legal columns left to choose from")]
    NoLegalColumns,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that end a game before it reaches a result.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("{player} could not provide a move: {source}")]
    Source {
        player: Player,
        source: MoveSourceError,
    },

    #[error("move rejected by the engine: {0}")]
    Move(#[from] MoveError),
}

impl SessionError {
    /// True when the human asked to stop rather than something failing.
    pub fn is_quit(&self) -> bool {
        matches!(
            self,
            SessionError::Source {
                source: MoveSourceError::Quit | MoveSourceError::InputClosed,
                ..
            }
        )
    }
}

/// Errors from a front-end running a sequence of games.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
