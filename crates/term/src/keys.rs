//! Keyboard: crossterm events translated to firmware-style key events.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use tracing::warn;
use uefi_snake_input::KeySource;

use crate::types::{KeyEvent, ScanCode};

/// Map a terminal key press to the key event a firmware keyboard would report.
///
/// `q` and Ctrl-C report as Escape so a terminal user can always leave.
pub fn map_key(key: event::KeyEvent) -> Option<KeyEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(ScanCode::Escape.into());
    }

    let event = match key.code {
        KeyCode::Up => ScanCode::Up.into(),
        KeyCode::Down => ScanCode::Down.into(),
        KeyCode::Left => ScanCode::Left.into(),
        KeyCode::Right => ScanCode::Right.into(),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => ScanCode::Escape.into(),
        KeyCode::Char(c) => KeyEvent::printable(c),
        KeyCode::Enter => KeyEvent::printable('\r'),
        _ => return None,
    };
    Some(event)
}

/// Non-blocking reader over the terminal's event queue.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    /// Next queued key press, or `None` if nothing is pending.
    ///
    /// Non-key events are skipped. Read errors are logged and end the poll.
    fn read_key(&mut self) -> Option<KeyEvent> {
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => {
                    warn!(error = %e, "terminal poll failed");
                    return None;
                }
            }

            match event::read() {
                Ok(Event::Key(key)) => {
                    if let Some(mapped) = map_key(key) {
                        return Some(mapped);
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "terminal read failed");
                    return None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> event::KeyEvent {
        event::KeyEvent::from(code)
    }

    #[test]
    fn arrows_map_to_scan_codes() {
        assert_eq!(map_key(press(KeyCode::Up)), Some(ScanCode::Up.into()));
        assert_eq!(map_key(press(KeyCode::Down)), Some(ScanCode::Down.into()));
        assert_eq!(map_key(press(KeyCode::Left)), Some(ScanCode::Left.into()));
        assert_eq!(map_key(press(KeyCode::Right)), Some(ScanCode::Right.into()));
    }

    #[test]
    fn quit_keys_report_escape() {
        let escape = Some(KeyEvent::from(ScanCode::Escape));
        assert_eq!(map_key(press(KeyCode::Esc)), escape);
        assert_eq!(map_key(press(KeyCode::Char('q'))), escape);
        assert_eq!(
            map_key(event::KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            escape
        );
    }

    #[test]
    fn plain_characters_are_printable() {
        assert_eq!(map_key(press(KeyCode::Char('w'))), Some(KeyEvent::printable('w')));
        assert_eq!(map_key(press(KeyCode::Tab)), None);
    }

    #[test]
    fn releases_are_dropped() {
        let release = event::KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }
}
