//! Command parsing for the TUI command deck
//!
//! Supports:
//! - `:q` or `:quit` → Quit command
//! - `:h` or `:help` → Help command
//! - `:r` or `:reload` → Reload the current level file
//! - `:w <path>` → Export placement commands as JSON
//! - `@<path>` → Load a level file

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Reload,
    LoadFile(String),
    Export(String),
    Unknown(String),
}

pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        let (name, argument) = match cmd.split_once(' ') {
            Some((name, argument)) => (name, argument.trim()),
            None => (cmd, ""),
        };
        match (name, argument) {
            ("q" | "quit", "") => Command::Quit,
            ("h" | "help", "") => Command::Help,
            ("r" | "reload", "") => Command::Reload,
            ("w" | "write", path) if !path.is_empty() => Command::Export(path.to_string()),
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() {
            Command::Unknown(input.to_string())
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::Reload => AppEvent::Reload,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::Export(path) => AppEvent::Export(path),
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn test_parse_help_variants() {
        assert_eq!(parse_command(":h"), Command::Help);
        assert_eq!(parse_command(":help"), Command::Help);
    }

    #[test]
    fn test_parse_reload() {
        assert_eq!(parse_command(":r"), Command::Reload);
        assert_eq!(parse_command(" :reload "), Command::Reload);
    }

    #[test]
    fn test_parse_load_file() {
        assert_eq!(
            parse_command("@successful_boards_ascii.txt"),
            Command::LoadFile("successful_boards_ascii.txt".to_string())
        );
    }

    #[test]
    fn test_parse_load_file_with_spaces() {
        assert_eq!(
            parse_command("@  levels/board 2.txt"),
            Command::LoadFile("levels/board 2.txt".to_string())
        );
    }

    #[test]
    fn test_parse_load_without_path() {
        assert!(matches!(parse_command("@"), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_export() {
        assert_eq!(
            parse_command(":w out/commands.json"),
            Command::Export("out/commands.json".to_string())
        );
        assert!(matches!(parse_command(":w"), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_quit_with_argument_is_unknown() {
        assert!(matches!(parse_command(":q now"), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_command(""), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_invalid_command() {
        assert!(matches!(parse_command("invalid"), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_whitespace_only() {
        assert!(matches!(parse_command("   "), Command::Unknown(_)));
    }

    #[test]
    fn test_command_to_app_event_load_file() {
        let event = command_to_app_event(Command::LoadFile("board.txt".to_string()));
        assert_eq!(event, AppEvent::LoadFile("board.txt".to_string()));
    }

    #[test]
    fn test_command_to_app_event_export() {
        let event = command_to_app_event(Command::Export("out.json".to_string()));
        assert_eq!(event, AppEvent::Export("out.json".to_string()));
    }

    #[test]
    fn test_command_to_app_event_unknown() {
        let event = command_to_app_event(Command::Unknown("invalid".to_string()));
        assert!(matches!(event, AppEvent::InvalidCommand(_)));
    }
}
