use crate::app::{mode::AppMode, App};
use crate::ui::board::render_board;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::Theme;
use crate::ui::view::{render_command_deck, render_placeholder, render_status, render_summary};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    // Dropped after the terminal so the screen is restored last
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let poll_timeout = Duration::from_millis(1000 / 60);

        loop {
            self.render_frame(app)?;

            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            if !event::poll(poll_timeout)? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match app.mode() {
                    AppMode::Command => match key.code {
                        KeyCode::Enter => app.submit_command(),
                        KeyCode::Esc => app.cancel_command(),
                        KeyCode::Backspace => app.pop_command_char(),
                        KeyCode::Char(c) => app.push_command_char(c),
                        _ => {}
                    },
                    AppMode::Preview => match key.code {
                        KeyCode::Up => app.scroll(-1, 0),
                        KeyCode::Down => app.scroll(1, 0),
                        KeyCode::Left => app.scroll(0, -1),
                        KeyCode::Right => app.scroll(0, 1),
                        KeyCode::Char(c) => app.handle_keypress(c),
                        _ => {}
                    },
                    AppMode::Quit => {}
                }
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.get_render_state();
        let theme = Theme::current();

        self.terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(2),
                ])
                .split(frame.area());

            match &render_state.board {
                Some(board) => {
                    let paragraph =
                        render_board(&board.canvas, &board.matrix, &theme).scroll(board.scroll);
                    frame.render_widget(paragraph, chunks[0]);
                    frame.render_widget(render_summary(&board.summary), chunks[1]);
                }
                None => frame.render_widget(render_placeholder(), chunks[0]),
            }

            frame.render_widget(render_status(render_state.status.as_deref()), chunks[2]);
            render_command_deck(
                frame,
                chunks[3],
                render_state.mode,
                &render_state.command_input,
            );
        })?;

        Ok(())
    }
}
