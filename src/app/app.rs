use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::{BoardView, RenderState};
use super::state::PreviewState;
use crate::engine::config::LevelConfig;
use crate::engine::export;
use crate::input::level::load_with_config;
use crate::ui::command::{command_to_app_event, parse_command};

pub const HELP_TEXT: &str =
    "@<path> load level | :r reload | :w <path> export JSON | :q quit | ':' command deck";

pub struct App {
    mode: AppMode,
    config: LevelConfig,
    preview: Option<PreviewState>,
    current_path: Option<String>,
    command_input: String,
    status: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(LevelConfig::default())
    }

    pub fn with_config(config: LevelConfig) -> Self {
        Self {
            mode: AppMode::Command,
            config,
            preview: None,
            current_path: None,
            command_input: String::new(),
            status: None,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    pub fn preview(&self) -> Option<&PreviewState> {
        self.preview.as_ref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn command_input(&self) -> &str {
        &self.command_input
    }

    /// Loads the configured default level.
    pub fn load_default_level(&mut self) {
        let path = self.config.level_path.clone();
        self.handle_event(AppEvent::LoadFile(path));
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoadFile(path) => self.load_level(path),
            AppEvent::Reload => match self.current_path.clone() {
                Some(path) => self.load_level(path),
                None => self.status = Some("No level loaded".to_string()),
            },
            AppEvent::Export(path) => self.export_commands(&path),
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::Help => self.status = Some(HELP_TEXT.to_string()),
            AppEvent::Warning(message) => {
                self.status = Some(match self.status.take() {
                    Some(status) => format!("{} | Warning: {}", status, message),
                    None => format!("Warning: {}", message),
                })
            }
            AppEvent::InvalidCommand(input) => {
                self.status = Some(format!("Unknown command: '{}' (:h for help)", input))
            }
        }
    }

    /// Key handling in Preview mode
    pub fn handle_keypress(&mut self, c: char) {
        match c {
            ':' => {
                self.command_input.clear();
                self.mode = AppMode::Command;
            }
            'q' => self.mode = AppMode::Quit,
            'h' => self.scroll(0, -1),
            'l' => self.scroll(0, 1),
            'k' => self.scroll(-1, 0),
            'j' => self.scroll(1, 0),
            _ => {}
        }
    }

    pub fn scroll(&mut self, rows: i32, columns: i32) {
        if let Some(preview) = self.preview.as_mut() {
            preview.scroll_by(rows, columns);
        }
    }

    pub fn push_command_char(&mut self, c: char) {
        self.command_input.push(c);
    }

    pub fn pop_command_char(&mut self) {
        self.command_input.pop();
    }

    /// Leaves the command deck, back to the board if one is loaded.
    pub fn cancel_command(&mut self) {
        self.command_input.clear();
        self.mode = self.resting_mode();
    }

    pub fn submit_command(&mut self) {
        let input = std::mem::take(&mut self.command_input);
        let event = command_to_app_event(parse_command(&input));
        self.mode = self.resting_mode();
        self.handle_event(event);
    }

    pub fn get_render_state(&self) -> RenderState {
        let mut state = RenderState::empty(self.mode);
        state.status = self.status.clone();
        state.command_input = self.command_input.clone();
        state.board = self.preview.as_ref().map(|preview| BoardView {
            source: preview.level.source.clone(),
            canvas: preview.canvas.clone(),
            matrix: preview.level.matrix.clone(),
            summary: preview.summary.clone(),
            scroll: preview.scroll,
        });
        state
    }

    fn resting_mode(&self) -> AppMode {
        if self.mode == AppMode::Quit {
            AppMode::Quit
        } else if self.preview.is_some() {
            AppMode::Preview
        } else {
            AppMode::Command
        }
    }

    fn load_level(&mut self, path: String) {
        match load_with_config(&path, &self.config) {
            Ok(level) => {
                let preview = PreviewState::new(level);
                let warnings = level_warnings(&preview);
                self.status = Some(format!(
                    "Loaded {}: {} placements",
                    preview.level.source,
                    preview.level.commands.len()
                ));
                self.preview = Some(preview);
                self.current_path = Some(path);
                self.mode = AppMode::Preview;
                for warning in warnings {
                    self.handle_event(AppEvent::Warning(warning));
                }
            }
            Err(e) => {
                self.status = Some(format!("Error: {}", e));
                self.mode = self.resting_mode();
            }
        }
    }

    fn export_commands(&mut self, path: &str) {
        let Some(preview) = self.preview.as_ref() else {
            self.status = Some("No level loaded".to_string());
            return;
        };

        self.status = Some(match export::write_json(path, &preview.level.commands) {
            Ok(()) => format!(
                "Exported {} commands to {}",
                preview.level.commands.len(),
                path
            ),
            Err(e) => format!("Error: {}", e),
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn level_warnings(preview: &PreviewState) -> Vec<String> {
    let mut warnings = Vec::new();
    if !preview.summary.ragged_rows.is_empty() {
        warnings.push(format!(
            "rows {:?} differ from row 0 width {}",
            preview.summary.ragged_rows, preview.summary.columns
        ));
    }
    if preview.canvas.spawn_off_board() {
        warnings.push("player spawn is outside the board".to_string());
    }
    if let Some(error) = &preview.sink_error {
        warnings.push(format!("preview incomplete: {}", error));
    }
    warnings
}
