// Configuration for the level pipeline.
// Defaults match the board files written by the puzzle generator.

use super::placement::Position;

/// Separators used to split raw level text into a token matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Row separator, matched exactly (default CRLF)
    pub row_separator: String,

    /// Token separator inside a row (default a single space)
    pub token_separator: char,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_separator: "\r\n".to_string(),
            token_separator: ' ',
        }
    }
}

/// Level loading configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LevelConfig {
    /// Level file read on startup (default `successful_boards_ascii.txt`)
    pub level_path: String,

    pub grid: GridConfig,

    /// Where the player spawns, regardless of which cell holds the peg
    pub spawn_position: Position,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            level_path: DEFAULT_LEVEL_PATH.to_string(),
            grid: GridConfig::default(),
            spawn_position: SPAWN_POSITION,
        }
    }
}

pub const DEFAULT_LEVEL_PATH: &str = "successful_boards_ascii.txt";

pub const SPAWN_POSITION: Position = Position {
    x: 0.0,
    y: 0.5,
    z: 0.0,
};
