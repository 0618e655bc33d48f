//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Why a placement is illegal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("cell {0} is already occupied")]
    Occupied(usize),

    #[error("cell {0} would create two free threes at once")]
    DoubleFreeThree(usize),
}

/// Errors surfaced by a game session to its front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal move: {0}")]
    IllegalMove(#[from] RuleError),

    #[error("the game is already over")]
    GameOver,

    #[error("it is the engine's turn")]
    NotYourTurn,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
