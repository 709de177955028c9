use crate::app::mode::AppMode;
use crate::engine::{LevelSummary, PlacementKind};
use crate::ui::board::kind_glyph;
use crate::ui::theme::{colors, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// One-line legend with per-kind counts, e.g. `O 12  █ 4  ◆ 0  @ 1  7x5`
pub fn render_summary(summary: &LevelSummary) -> Line<'static> {
    let theme = Theme::current();
    let mut spans = Vec::new();
    for kind in PlacementKind::ALL {
        spans.push(Span::styled(
            kind_glyph(kind),
            Style::default().fg(theme.kind_color(kind)),
        ));
        spans.push(Span::styled(
            format!(" {}  ", summary.count(kind)),
            Style::default().fg(colors::text()),
        ));
    }
    spans.push(Span::styled(
        format!("{}x{}", summary.columns, summary.rows),
        Style::default().fg(colors::dimmed()),
    ));

    Line::from(spans).alignment(Alignment::Left)
}

pub fn render_status(status: Option<&str>) -> Paragraph<'static> {
    Paragraph::new(status.unwrap_or("").to_string())
        .alignment(Alignment::Left)
        .style(Style::default().fg(colors::dimmed()).bg(colors::background()))
}

pub fn render_placeholder() -> Paragraph<'static> {
    let text = "Type @filename to load a level\n:h for help, :q to quit";
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::dimmed()).bg(colors::background()))
}

pub fn mode_indicator(mode: AppMode) -> &'static str {
    match mode {
        AppMode::Command => " COMMAND ",
        AppMode::Preview => " PREVIEW ",
        AppMode::Quit => " QUIT ",
    }
}

pub fn render_command_deck(frame: &mut Frame, area: Rect, mode: AppMode, input: &str) {
    frame.render_widget(Clear, area);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let theme = Theme::current();
    let accent_bar = Paragraph::new("▌")
        .style(Style::default().fg(theme.spawn).bg(colors::background()));
    frame.render_widget(accent_bar, layout[0]);

    let input_text = match mode {
        AppMode::Command => format!("{}{}", mode_indicator(mode), input),
        _ => format!("{} ':' command deck, hjkl scroll, q quit", mode_indicator(mode)),
    };

    let input_widget = Paragraph::new(input_text)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(colors::dimmed())),
        )
        .style(Style::default().fg(colors::text()).bg(colors::background()));

    frame.render_widget(input_widget, layout[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{buffer::Buffer, widgets::Widget};

    #[test]
    fn test_render_summary_lists_every_kind() {
        let summary = LevelSummary {
            rows: 5,
            columns: 7,
            valid: 12,
            obstacles: 4,
            spawns: 1,
            ..LevelSummary::default()
        };
        let line = render_summary(&summary);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("O 12"));
        assert!(text.contains("█ 4"));
        assert!(text.contains("◆ 0"));
        assert!(text.contains("@ 1"));
        assert!(text.ends_with("7x5"));
    }

    fn draw_status(status: Option<&str>) -> Buffer {
        let area = Rect::new(0, 0, 12, 1);
        let mut buffer = Buffer::empty(area);
        render_status(status).render(area, &mut buffer);
        buffer
    }

    #[test]
    fn test_render_status_text() {
        let buffer = draw_status(Some("Loaded"));
        let text: String = (0..6u16).map(|x| buffer[(x, 0)].symbol()).collect();
        assert_eq!(text, "Loaded");
        assert_eq!(buffer[(0, 0)].fg, colors::dimmed());
        assert_eq!(buffer[(0, 0)].bg, colors::background());
    }

    #[test]
    fn test_render_status_empty_is_blank() {
        let buffer = draw_status(None);
        assert!((0..12u16).all(|x| buffer[(x, 0)].symbol() == " "));
        assert_eq!(buffer[(0, 0)].bg, colors::background());
    }

    #[test]
    fn test_mode_indicator() {
        assert_eq!(mode_indicator(AppMode::Preview), " PREVIEW ");
        assert_eq!(mode_indicator(AppMode::Command), " COMMAND ");
    }
}
