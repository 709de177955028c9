use crate::engine::PlacementKind;
use ratatui::style::Color;

/// Board preview colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub dimmed: Color,
    pub floor: Color,
    pub obstacle: Color,
    pub checkpoint: Color,
    pub spawn: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38),    // #1A1B26 Stormy Dark
            text: Color::Rgb(169, 177, 214),       // #A9B1D6 Light Blue
            dimmed: Color::Rgb(100, 110, 150),     // #646E96 Dimmed Blue
            floor: Color::Rgb(158, 206, 106),      // #9ECE6A Moss Green
            obstacle: Color::Rgb(86, 95, 137),     // #565F89 Slate
            checkpoint: Color::Rgb(224, 175, 104), // #E0AF68 Amber
            spawn: Color::Rgb(247, 118, 142),      // #F7768E Coral Red
        }
    }

    pub fn current() -> Self {
        Self::midnight()
    }

    pub fn kind_color(&self, kind: PlacementKind) -> Color {
        match kind {
            PlacementKind::FloorValid => self.floor,
            PlacementKind::FloorObstacle => self.obstacle,
            PlacementKind::FloorCheckpoint => self.checkpoint,
            PlacementKind::PlayerSpawn => self.spawn,
        }
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
}
