use crate::engine::{instantiate_all, LevelSummary, SinkError};
use crate::input::LoadedLevel;
use crate::ui::board::BoardCanvas;

/// A loaded level and the canvas it was drawn into.
pub struct PreviewState {
    pub level: LoadedLevel,
    pub canvas: BoardCanvas,
    pub summary: LevelSummary,
    /// Set when the canvas refused a command; later commands were not drawn
    pub sink_error: Option<SinkError>,
    /// (rows, columns) scrolled from the top-left corner
    pub scroll: (u16, u16),
}

impl PreviewState {
    pub fn new(level: LoadedLevel) -> Self {
        let mut canvas = BoardCanvas::for_matrix(&level.matrix);
        let sink_error = instantiate_all(&level.commands, &mut canvas).err();
        let summary = level.summary();

        Self {
            level,
            canvas,
            summary,
            sink_error,
            scroll: (0, 0),
        }
    }

    /// Scroll by whole cells, clamped to the board. A cell is two columns wide.
    pub fn scroll_by(&mut self, rows: i32, columns: i32) {
        let max_row = self.canvas.height().saturating_sub(1) as i32;
        let max_column = (self.canvas.width().saturating_sub(1) * 2) as i32;

        let row = (self.scroll.0 as i32 + rows).clamp(0, max_row);
        let column = (self.scroll.1 as i32 + columns * 2).clamp(0, max_column);
        self.scroll = (row as u16, column as u16);
    }
}
