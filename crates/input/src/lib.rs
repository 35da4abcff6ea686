//! Firmware keyboard input module (engine-facing).
//!
//! This module is independent of any particular firmware or terminal API. It
//! maps [`crate::types::KeyEvent`] values into directions and drains the key
//! queue once per tick.

#![cfg_attr(not(test), no_std)]

pub mod drain;
pub mod map;

pub use uefi_snake_types as types;

pub use drain::{drain_latest, KeySource, Polled};
pub use map::{direction_for, should_quit};
