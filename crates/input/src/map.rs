//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Only w/a/s/d, r, and q (either case) are recognized. Everything else,
/// arrow keys included, maps to `None`: crossterm delivers a multi-byte
/// escape sequence as one event, so an unrecognized sequence is swallowed
/// whole instead of leaking stray bytes into the game.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::Turn(Direction::Up)),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::Turn(Direction::Down)),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::Turn(Direction::Left)),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::Turn(Direction::Right)),

        // Restart (honored by the core only after game over)
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        // Quit flag, checked by the main loop
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameAction::Quit),

        _ => None,
    }
}

/// Check if key should quit immediately, bypassing the game state.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
