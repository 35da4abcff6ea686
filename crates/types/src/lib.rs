//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game: grid
//! dimensions, directions, cell states, firmware key events and pixels.
//! Everything here is plain data with no dependencies, usable from the
//! firmware build (`no_std`) as well as from the terminal host.
//!
//! # Grid Dimensions
//!
//! - **Cells per axis**: 9 (indexed 0-8)
//! - **Total cells**: 81, addressed by a linear index `0..81`
//! - **Spawn position**: head at the center cell (index 40), body to the left
//!
//! # Timing Constants
//!
//! Timing values are in microseconds, matching the firmware stall service:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_US` | 500 000 | Delay between two snake steps |
//! | `END_DELAY_US` | 4 000 000 | Final frame hold after a win or loss |
//! | `SPLASH_DELAY_US` | 2 000 000 | Logo splash hold before the first tick |
//!
//! # Rendering Constants
//!
//! - `CELL_PERCENTAGE_SCREEN_OCCUPANCY`: 3% of the display width per cell
//! - `CELL_BORDER_SIZE`: 2 pixels of grid line between cells
//! - `BITMAP_CACHE_CAPACITY`: 5 decoded images, never evicted
//!
//! # Examples
//!
//! ```
//! use uefi_snake_types::{Direction, CELLS_PER_AXIS, GRID_CELL_COUNT};
//!
//! assert_eq!(GRID_CELL_COUNT, CELLS_PER_AXIS * CELLS_PER_AXIS);
//!
//! // Reversing is never allowed, everything else is.
//! assert!(Direction::Up.is_reverse_of(Direction::Down));
//! assert!(!Direction::Up.is_reverse_of(Direction::Left));
//! assert!(!Direction::Up.is_reverse_of(Direction::Up));
//! ```

#![cfg_attr(not(test), no_std)]

use core::fmt;

/// Grid side length in cells (9)
pub const CELLS_PER_AXIS: usize = 9;

/// Total number of grid cells (81)
pub const GRID_CELL_COUNT: usize = CELLS_PER_AXIS * CELLS_PER_AXIS;

/// Snake length at game start
pub const SNAKE_INITIAL_LENGTH: usize = 5;

/// Score awarded per apple
pub const APPLE_REWARD: u32 = 100;

/// Fixed generator seed; the game is deterministic across runs.
pub const RNG_SEED: u64 = 13_371_337;

/// Cell side as a percentage of the display width
pub const CELL_PERCENTAGE_SCREEN_OCCUPANCY: usize = 3;

/// Grid line thickness in pixels
pub const CELL_BORDER_SIZE: usize = 2;

/// Delay between ticks (500ms)
pub const TICK_US: u64 = 500_000;

/// Final frame hold after the game ends (4s)
pub const END_DELAY_US: u64 = 4_000_000;

/// Logo splash hold before the first tick (2s)
pub const SPLASH_DELAY_US: u64 = 2_000_000;

/// Upper bound on key reads per tick when draining the input queue
pub const INPUT_DRAIN_LIMIT: usize = 32;

/// Maximum number of decoded bitmaps kept by the compositor
pub const BITMAP_CACHE_CAPACITY: usize = 5;

/// Linear cell index, `y * CELLS_PER_AXIS + x`
pub type CellIndex = u16;

/// Column of a linear cell index
#[inline(always)]
pub const fn cell_x(index: CellIndex) -> usize {
    index as usize % CELLS_PER_AXIS
}

/// Row of a linear cell index
#[inline(always)]
pub const fn cell_y(index: CellIndex) -> usize {
    index as usize / CELLS_PER_AXIS
}

/// Linear index of column `x`, row `y`
#[inline(always)]
pub const fn cell_index(x: usize, y: usize) -> CellIndex {
    (y * CELLS_PER_AXIS + x) as CellIndex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_configuration_defaults() {
        assert_eq!(CELLS_PER_AXIS, 9);
        assert_eq!(GRID_CELL_COUNT, 81);
        assert_eq!(SNAKE_INITIAL_LENGTH, 5);
        assert_eq!(APPLE_REWARD, 100);
        assert_eq!(CELL_PERCENTAGE_SCREEN_OCCUPANCY, 3);
        assert_eq!(CELL_BORDER_SIZE, 2);
        assert_eq!(TICK_US, 500_000);
        assert_eq!(END_DELAY_US, 4_000_000);
        assert_eq!(BITMAP_CACHE_CAPACITY, 5);
    }

    #[test]
    fn index_helpers_round_trip_center() {
        let center = cell_index(CELLS_PER_AXIS / 2, CELLS_PER_AXIS / 2);
        assert_eq!(center, 40);
        assert_eq!(cell_x(center), 4);
        assert_eq!(cell_y(center), 4);
    }

    #[test]
    fn reverse_pairs() {
        for dir in Direction::ALL {
            assert!(dir.is_reverse_of(dir.opposite()));
            assert!(!dir.is_reverse_of(dir));
        }
        assert!(!Direction::Left.is_reverse_of(Direction::Up));
    }
}

/// The four cardinal headings of the snake
///
/// Screen coordinates: `Up` decreases the row, `Left` decreases the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Signed change of the linear cell index for one step
    ///
    /// # Examples
    ///
    /// ```
    /// use uefi_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Left.delta(), -1);
    /// assert_eq!(Direction::Down.delta(), 9);
    /// ```
    pub const fn delta(self) -> i32 {
        match self {
            Direction::Up => -(CELLS_PER_AXIS as i32),
            Direction::Down => CELLS_PER_AXIS as i32,
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    /// The 180° turn of this heading
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True when `self` would make the snake turn back onto itself from `heading`
    pub fn is_reverse_of(self, heading: Direction) -> bool {
        self == heading.opposite()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Snake,
    Apple,
}

/// Engine state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    /// The snake ran into itself.
    Lost,
    /// The snake fills every cell.
    Won,
}

/// How a run of the game loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won,
    Lost,
    /// The player pressed escape.
    Aborted,
}

/// Firmware scan codes the game cares about
///
/// Printable keys arrive with [`ScanCode::Null`] and a unicode character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanCode {
    Null,
    Up,
    Down,
    Right,
    Left,
    Escape,
    Other(u16),
}

/// A key read from the firmware input queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub scan_code: ScanCode,
    pub unicode: Option<char>,
}

impl KeyEvent {
    pub const fn scan(scan_code: ScanCode) -> Self {
        Self {
            scan_code,
            unicode: None,
        }
    }

    pub const fn printable(ch: char) -> Self {
        Self {
            scan_code: ScanCode::Null,
            unicode: Some(ch),
        }
    }
}

impl From<ScanCode> for KeyEvent {
    fn from(scan_code: ScanCode) -> Self {
        Self::scan(scan_code)
    }
}

/// One framebuffer pixel in firmware blit layout (blue, green, red, reserved)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Pixel {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
    pub reserved: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::rgb(0, 0, 0);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            blue,
            green,
            red,
            reserved: 0,
        }
    }
}
