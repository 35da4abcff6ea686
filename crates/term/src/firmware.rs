//! TerminalFirmware: keyboard, delay and console services on a terminal.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};
use tracing::{debug, warn};

use uefi_snake_engine::Firmware;
use uefi_snake_input::KeySource;

use crate::keys::TerminalKeys;
use crate::types::KeyEvent;

/// Firmware services backed by the controlling terminal.
///
/// Console output goes to the `status_rows` rows above the pixel area. Each
/// `print` replaces what the previous one wrote there.
pub struct TerminalFirmware {
    keys: TerminalKeys,
    stdout: io::Stdout,
    status_rows: u16,
    buf: Vec<u8>,
}

impl TerminalFirmware {
    pub fn new(status_rows: u16) -> Self {
        Self {
            keys: TerminalKeys,
            stdout: io::stdout(),
            status_rows,
            buf: Vec::with_capacity(256),
        }
    }

    fn write_status(&mut self, text: &str) -> io::Result<()> {
        self.buf.clear();
        let mut lines = status_lines(text, self.status_rows as usize);
        for row in 0..self.status_rows {
            self.buf.queue(cursor::MoveTo(0, row))?;
            self.buf
                .queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
            if let Some(line) = lines.next() {
                self.buf.queue(Print(line))?;
            }
        }
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()
    }
}

impl KeySource for TerminalFirmware {
    fn read_key(&mut self) -> Option<KeyEvent> {
        self.keys.read_key()
    }
}

impl Firmware for TerminalFirmware {
    fn stall(&mut self, micros: u64) {
        thread::sleep(Duration::from_micros(micros));
    }

    fn print(&mut self, text: &str) {
        debug!(text = text.trim(), "console");
        if let Err(e) = self.write_status(text) {
            warn!(error = %e, "console write failed");
        }
    }
}

/// Non-empty lines of `text`, at most `rows` of them.
fn status_lines(text: &str, rows: usize) -> impl Iterator<Item = &str> {
    text.lines().filter(|line| !line.trim().is_empty()).take(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_skipped() {
        let lines: Vec<_> = status_lines("\n\nScore: 100\nDirection: Up\n", 3).collect();
        assert_eq!(lines, ["Score: 100", "Direction: Up"]);
    }

    #[test]
    fn output_is_cut_to_the_status_area() {
        let lines: Vec<_> = status_lines("a\nb\nc\nd", 2).collect();
        assert_eq!(lines, ["a", "b"]);
    }
}
