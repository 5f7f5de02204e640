use std::path::Path;

use tracing::warn;

use crate::ai::AgentKind;
use crate::error::ConfigError;
use crate::game::{COLS, ROWS};

/// Largest board side the terminal view can draw.
pub const MAX_BOARD_SIDE: usize = 16;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub arena: ArenaConfig,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub columns: usize,
    pub rows: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            columns: COLS,
            rows: ROWS,
        }
    }
}

/// Settings for a headless series of games.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games: usize,
    pub seed: Option<u64>,
    pub red: AgentKind,
    pub yellow: AgentKind,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 100,
            seed: None,
            red: AgentKind::Heuristic,
            yellow: AgentKind::Random,
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
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_BOARD_SIDE).contains(&self.board.columns) {
            return Err(ConfigError::Validation(format!(
                "board.columns must be in 1..={MAX_BOARD_SIDE}"
            )));
        }
        if !(1..=MAX_BOARD_SIDE).contains(&self.board.rows) {
            return Err(ConfigError::Validation(format!(
                "board.rows must be in 1..={MAX_BOARD_SIDE}"
            )));
        }
        if self.arena.games == 0 {
            return Err(ConfigError::Validation(
                "arena.games must be > 0".into(),
            ));
        }
        Ok(())
    }
}
