//! Key mapping from firmware key events to game input.

use crate::types::{Direction, KeyEvent, ScanCode};

/// Map an arrow key to a direction; every other key is ignored.
pub fn direction_for(key: KeyEvent) -> Option<Direction> {
    match key.scan_code {
        ScanCode::Up => Some(Direction::Up),
        ScanCode::Down => Some(Direction::Down),
        ScanCode::Left => Some(Direction::Left),
        ScanCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.scan_code == ScanCode::Escape
}
