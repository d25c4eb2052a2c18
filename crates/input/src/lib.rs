//! Keyboard mapping for the terminal shell.
//!
//! This crate is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`GameCommand`] values and decides nothing
//! about game state; whether a command is honored in the current phase is
//! the session's business. Quitting never was a game command, so it gets
//! its own predicate.

use blockfall_types::GameCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map one keyboard event to a game command.
///
/// Arrow keys are the primary controls, with vi-style and WASD synonyms
/// for terminals where arrow handling is unreliable. Enter requests a
/// (re)start; the shell decides when that is allowed.
pub fn handle_key_event(key: KeyEvent) -> Option<GameCommand> {
    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(GameCommand::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(GameCommand::MoveRight),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameCommand::SoftDrop),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameCommand::RotateCw),

        // Actions
        KeyCode::Char(' ') => Some(GameCommand::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameCommand::TogglePause),
        KeyCode::Enter => Some(GameCommand::Start),

        _ => None,
    }
}

/// Check whether a key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
