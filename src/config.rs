//! Game configuration
//!
//! Settings come from an optional TOML file; every field has a default.
//!
//! ```toml
//! ruleset = "restricted"
//! first = "black"
//! depth = 3
//!
//! [mode]
//! kind = "player-vs-engine"
//! human = "white"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{Ruleset, Stone};
use crate::error::ConfigError;
use crate::session::GameMode;

/// Deepest search accepted from configuration
pub const MAX_DEPTH: u8 = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub ruleset: Ruleset,
    pub mode: GameMode,
    /// Side that moves first
    pub first: Stone,
    /// Engine search depth in plies
    pub depth: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ruleset: Ruleset::Restricted,
            mode: GameMode::default(),
            first: Stone::Black,
            depth: 3,
        }
    }
}

impl GameConfig {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first == Stone::Empty {
            return Err(ConfigError::Invalid("first must be black or white".into()));
        }
        if let GameMode::PlayerVsEngine { human: Stone::Empty } = self.mode {
            return Err(ConfigError::Invalid("human must be black or white".into()));
        }
        if !(1..=MAX_DEPTH).contains(&self.depth) {
            return Err(ConfigError::Invalid(format!(
                "depth must be between 1 and {MAX_DEPTH}, got {}",
                self.depth
            )));
        }
        Ok(())
    }
}
