//! Game settings: board size, mode and the human's mark.

use crate::games::tictactoe::{BoardSize, Mark};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who plays the two sides.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    TwoPlayer,
    /// One human against the search engine.
    VersusComputer,
}

impl GameMode {
    /// Returns the display label for this mode.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::TwoPlayer => "2 Players",
            Self::VersusComputer => "Play with Computer",
        }
    }

    /// Toggles between the two modes.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::TwoPlayer => Self::VersusComputer,
            Self::VersusComputer => Self::TwoPlayer,
        }
    }
}

/// Settings used to start a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSettings {
    /// Side length of the board (3, 5 or 7).
    #[serde(default)]
    board_size: BoardSize,

    /// Two humans, or human against computer.
    #[serde(default)]
    mode: GameMode,

    /// The human's mark when playing the computer. X always moves first.
    #[serde(default = "default_player_mark")]
    player_mark: Mark,
}

#[instrument]
fn default_player_mark() -> Mark {
    Mark::X
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_size: BoardSize::default(),
            mode: GameMode::default(),
            player_mark: default_player_mark(),
        }
    }
}

impl GameSettings {
    /// Creates settings from explicit values.
    #[instrument]
    pub fn new(board_size: BoardSize, mode: GameMode, player_mark: Mark) -> Self {
        Self {
            board_size,
            mode,
            player_mark,
        }
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;
        let settings = Self::from_toml(&content)?;
        info!(
            size = %settings.board_size,
            mode = %settings.mode,
            mark = %settings.player_mark,
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Loads settings from `path`, or returns defaults if the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// The computer's mark in versus-computer mode.
    pub fn computer_mark(&self) -> Mark {
        self.player_mark.opponent()
    }

    /// Returns a copy with a different board size.
    pub fn with_board_size(self, board_size: BoardSize) -> Self {
        Self { board_size, ..self }
    }

    /// Returns a copy with a different mode.
    pub fn with_mode(self, mode: GameMode) -> Self {
        Self { mode, ..self }
    }

    /// Returns a copy with a different human mark.
    pub fn with_player_mark(self, player_mark: Mark) -> Self {
        Self {
            player_mark,
            ..self
        }
    }
}

/// Configuration error.
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
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
