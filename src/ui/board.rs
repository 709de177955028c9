//! Top-down board preview.
//!
//! `BoardCanvas` is a placement sink that stores floor placements in a
//! character grid, one cell per matrix column/row. It only understands
//! integral floor positions `(x, _, -y)`; a floor placement anywhere else is
//! rejected with `SinkError::OutOfBounds`. A spawn that lands on no cell is
//! only marked as off the board, so the rest of the level still draws.
//!
//! Cells with no placement fall back to the raw token so free-form level
//! text stays visible (dimmed). Tokens are cut to their first grapheme and
//! anything that is not exactly one terminal column wide is drawn as `?`.

use crate::engine::{
    PlacementCommand, PlacementKind, PlacementSink, Position, SinkError, TokenMatrix,
};
use crate::ui::theme::Theme;
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq)]
pub struct BoardCanvas {
    width: usize,
    height: usize,
    cells: Vec<Option<PlacementKind>>,
    spawn: Option<(usize, usize)>,
    spawn_off_board: bool,
}

impl BoardCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
            spawn: None,
            spawn_off_board: false,
        }
    }

    /// Canvas sized to the matrix: row 0's width by the row count.
    pub fn for_matrix(matrix: &TokenMatrix) -> Self {
        Self::new(matrix.column_bound(), matrix.row_count())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, column: usize, row: usize) -> Option<PlacementKind> {
        if column >= self.width || row >= self.height {
            return None;
        }
        self.cells[row * self.width + column]
    }

    /// Cell holding the player spawn, if one was placed
    pub fn spawn(&self) -> Option<(usize, usize)> {
        self.spawn
    }

    /// True when a spawn was placed at a position outside every cell
    pub fn spawn_off_board(&self) -> bool {
        self.spawn_off_board
    }

    fn cell_of(&self, position: &Position) -> Result<(usize, usize), SinkError> {
        let column = position.x;
        let row = -position.z;
        let integral = column.fract() == 0.0 && row.fract() == 0.0;
        if !integral || column < 0.0 || row < 0.0 {
            return Err(SinkError::OutOfBounds(format!(
                "({}, {}, {}) is not a board cell",
                position.x, position.y, position.z
            )));
        }

        let (column, row) = (column as usize, row as usize);
        if column >= self.width || row >= self.height {
            return Err(SinkError::OutOfBounds(format!(
                "cell ({}, {}) outside {}x{} board",
                column, row, self.width, self.height
            )));
        }
        Ok((column, row))
    }
}

impl PlacementSink for BoardCanvas {
    fn instantiate(&mut self, command: &PlacementCommand) -> Result<(), SinkError> {
        if command.kind == PlacementKind::PlayerSpawn {
            match self.cell_of(&command.position) {
                Ok(cell) => {
                    self.spawn = Some(cell);
                    self.spawn_off_board = false;
                }
                Err(_) => {
                    self.spawn = None;
                    self.spawn_off_board = true;
                }
            }
            return Ok(());
        }

        let (column, row) = self.cell_of(&command.position)?;
        self.cells[row * self.width + column] = Some(command.kind);
        Ok(())
    }
}

pub fn kind_glyph(kind: PlacementKind) -> &'static str {
    match kind {
        PlacementKind::FloorValid => "O",
        PlacementKind::FloorObstacle => "█",
        PlacementKind::FloorCheckpoint => "◆",
        PlacementKind::PlayerSpawn => "@",
    }
}

/// First grapheme of `token` if it fills exactly one terminal column.
pub fn fit_token(token: &str) -> &str {
    match token.graphemes(true).next() {
        None => " ",
        Some(grapheme) if grapheme.width() == 1 => grapheme,
        Some(_) => "?",
    }
}

pub fn render_board(
    canvas: &BoardCanvas,
    matrix: &TokenMatrix,
    theme: &Theme,
) -> Paragraph<'static> {
    let background = Style::default().bg(theme.background);
    let mut lines = Vec::with_capacity(canvas.height());

    for row in 0..canvas.height() {
        let mut spans = Vec::with_capacity(canvas.width() * 2);
        for column in 0..canvas.width() {
            let span = if canvas.spawn() == Some((column, row)) {
                Span::styled(
                    kind_glyph(PlacementKind::PlayerSpawn),
                    background.fg(theme.spawn),
                )
            } else if let Some(kind) = canvas.cell(column, row) {
                Span::styled(kind_glyph(kind), background.fg(theme.kind_color(kind)))
            } else {
                let token = matrix.get(row, column).unwrap_or("");
                Span::styled(fit_token(token).to_string(), background.fg(theme.dimmed))
            };
            spans.push(span);
            spans.push(Span::styled(" ", background));
        }
        lines.push(Line::from(spans));
    }

    Paragraph::new(lines).style(background)
}
