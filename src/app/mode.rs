#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Command deck is focused; no level is required
    Command,
    /// A level is loaded and drawn
    Preview,
    Quit,
}
