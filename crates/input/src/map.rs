//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game commands.
///
/// Character keys use the single-character bindings of [`Command::from_char`];
/// arrow keys are accepted as aliases for movement and rotation.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Down => Some(Command::SoftDrop),
        KeyCode::Up => Some(Command::RotateRight),
        KeyCode::Char(ch) => Command::from_char(ch),
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// Raw mode swallows the interrupt signal, so Ctrl-C is handled here too.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char(Command::Quit.key())
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
