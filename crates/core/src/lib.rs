//! Core game logic module - pure, deterministic, and testable
//!
//! This crate is the grid engine: it owns the game rules and the game state,
//! and has **zero dependencies** on display, input, or firmware services:
//!
//! - **Deterministic**: the apple generator is seeded from a fixed constant
//! - **Testable**: every rule is reachable through [`GameState::advance`]
//! - **Portable**: `no_std`, runs inside boot firmware and on a desktop host
//! - **Allocation-free**: the snake body and scratch lists are fixed-capacity
//!
//! # Module Structure
//!
//! - [`grid`]: 9x9 cell matrix and the wraparound step
//! - [`snake`]: ordered body cells, head first
//! - [`game_state`]: movement, growth, collision, apple placement, win/loss
//! - [`rng`]: xorshift generator for apple placement
//!
//! # Game Rules
//!
//! - The snake starts five cells long, head on the center cell, heading up
//! - A step moves the head by ±1 (horizontal) or ±9 (vertical) on the linear
//!   index, modulo 81
//! - Eating an apple grows the snake by one and scores 100
//! - Entering a body cell loses the game; entering the cell the tail is
//!   leaving this step does not
//! - Filling all 81 cells wins the game
//!
//! # Example
//!
//! ```
//! use uefi_snake_core::{GameState, Step};
//! use uefi_snake_core::types::{Direction, RNG_SEED};
//!
//! let mut game = GameState::new(RNG_SEED);
//! assert_eq!(game.head(), 40);
//!
//! let step = game.advance(Direction::Up).unwrap();
//! assert_ne!(step, Step::Won);
//! assert_eq!(game.head(), 31);
//! ```

#![cfg_attr(not(test), no_std)]

pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snake;

pub use uefi_snake_types as types;

pub use game_state::{GameState, LayoutError, Step, StepError};
pub use grid::{next_cell, Grid};
pub use rng::XorShiftRng;
pub use snake::Snake;
