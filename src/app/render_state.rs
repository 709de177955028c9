use crate::app::mode::AppMode;
use crate::engine::{LevelSummary, TokenMatrix};
use crate::ui::board::BoardCanvas;

/// Render state for UI components
pub struct RenderState {
    pub mode: AppMode,
    pub board: Option<BoardView>,
    pub status: Option<String>,
    pub command_input: String,
}

/// Everything needed to draw a loaded level
pub struct BoardView {
    pub source: String,
    pub canvas: BoardCanvas,
    pub matrix: TokenMatrix,
    pub summary: LevelSummary,
    pub scroll: (u16, u16),
}

impl RenderState {
    /// Create an empty render state for when no level is loaded
    pub fn empty(mode: AppMode) -> Self {
        Self {
            mode,
            board: None,
            status: None,
            command_input: String::new(),
        }
    }
}
