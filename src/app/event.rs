/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    Reload,
    Export(String),
    Quit,
    Help,
    Warning(String),
    InvalidCommand(String),
}
