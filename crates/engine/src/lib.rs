//! Game loop for the firmware snake.
//!
//! Ties the grid engine, the input drain and the compositor together:
//! one tick polls the key queue, reconciles the requested direction with
//! the current heading, advances the engine, renders and presents the frame,
//! prints the status text and then waits for the next tick.
//!
//! Everything the loop needs from the outside world goes through the
//! [`Firmware`] trait (keys, delays, console) and the compositor's
//! [`Display`](uefi_snake_gfx::Display), so the same loop runs inside boot
//! firmware, in a terminal, or against scripted test doubles.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod config;
pub mod error;
pub mod game_loop;
pub mod host;

pub use uefi_snake_types as types;

pub use config::LoopConfig;
pub use error::EngineError;
pub use game_loop::{GameLoop, Tick};
pub use host::Firmware;
