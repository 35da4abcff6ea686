//! Keyboard, stall and console services from the system table.

use core::fmt::Write;

use uefi::proto::console::text::{Key, ScanCode as UefiScanCode};
use uefi::table::{Boot, SystemTable};
use tracing::warn;

use uefi_snake_engine::Firmware;
use uefi_snake_input::KeySource;
use uefi_snake_types::{KeyEvent, ScanCode};

pub struct UefiFirmware {
    system_table: SystemTable<Boot>,
}

impl UefiFirmware {
    pub fn new(system_table: SystemTable<Boot>) -> Self {
        Self { system_table }
    }
}

impl KeySource for UefiFirmware {
    fn read_key(&mut self) -> Option<KeyEvent> {
        match self.system_table.stdin().read_key() {
            Ok(key) => key.map(map_key),
            Err(e) => {
                warn!(status = ?e.status(), "reading a key failed");
                None
            }
        }
    }
}

impl Firmware for UefiFirmware {
    fn stall(&mut self, micros: u64) {
        self.system_table.boot_services().stall(micros as usize);
    }

    fn print(&mut self, text: &str) {
        let _ = self.system_table.stdout().write_str(text);
    }

    fn home(&mut self) {
        let _ = self.system_table.stdout().set_cursor_position(0, 0);
    }
}

fn map_key(key: Key) -> KeyEvent {
    match key {
        Key::Printable(c) => KeyEvent::printable(char::from(c)),
        Key::Special(code) => KeyEvent::scan(match code {
            UefiScanCode::UP => ScanCode::Up,
            UefiScanCode::DOWN => ScanCode::Down,
            UefiScanCode::RIGHT => ScanCode::Right,
            UefiScanCode::LEFT => ScanCode::Left,
            UefiScanCode::ESCAPE => ScanCode::Escape,
            UefiScanCode::NULL => ScanCode::Null,
            other => ScanCode::Other(other.0),
        }),
    }
}
