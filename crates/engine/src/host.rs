//! Firmware services used by the game loop, besides the display.

use uefi_snake_input::KeySource;

/// Keyboard, delay and console services of the hosting firmware.
pub trait Firmware: KeySource {
    /// Block for `micros` microseconds.
    fn stall(&mut self, micros: u64);

    /// Write status text to the console. Best effort: failures are ignored.
    fn print(&mut self, text: &str);

    /// Move the console cursor to the top-left corner before a status print.
    fn home(&mut self) {}
}

impl<F: Firmware + ?Sized> Firmware for &mut F {
    fn stall(&mut self, micros: u64) {
        (**self).stall(micros)
    }

    fn print(&mut self, text: &str) {
        (**self).print(text)
    }

    fn home(&mut self) {
        (**self).home()
    }
}
