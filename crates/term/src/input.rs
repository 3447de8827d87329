//! Key mapping from terminal events to shell commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// User toggles understood by the terminal host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    ToggleScaling,
    ToggleHighResolution,
    ToggleFullscreen,
    /// Pause when running, resume when paused.
    TogglePause,
    /// Show when hidden, hide when shown.
    ToggleVisibility,
    Quit,
}

pub fn map_key(key: KeyEvent) -> Option<ShellCommand> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(ShellCommand::Quit);
    }
    match key.code {
        KeyCode::Char('s') | KeyCode::Char('S') => Some(ShellCommand::ToggleScaling),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(ShellCommand::ToggleHighResolution),
        KeyCode::Char('f') | KeyCode::Char('F') | KeyCode::F(11) => Some(ShellCommand::ToggleFullscreen),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => Some(ShellCommand::TogglePause),
        KeyCode::Char('v') | KeyCode::Char('V') => Some(ShellCommand::ToggleVisibility),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(ShellCommand::Quit),
        _ => None,
    }
}
