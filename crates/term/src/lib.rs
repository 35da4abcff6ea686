//! Terminal host.
//!
//! Runs the game on a developer machine by standing in for the firmware:
//! the pixel frame is drawn with half-block characters, the keyboard comes
//! from crossterm events, and console text goes to a few status rows at the
//! top of the screen.

pub mod config;
pub mod decoder;
pub mod firmware;
pub mod keys;
pub mod renderer;

pub use uefi_snake_types as types;

pub use config::{HostConfig, STATUS_ROWS, TERMINAL_CELL_PERCENT};
pub use decoder::BmpDecoder;
pub use firmware::TerminalFirmware;
pub use keys::{map_key, TerminalKeys};
pub use renderer::{encode_frame_into, TerminalDisplay};
