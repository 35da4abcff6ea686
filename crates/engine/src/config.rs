//! Loop configuration.

use crate::types::{
    Direction, CELL_PERCENTAGE_SCREEN_OCCUPANCY, END_DELAY_US, INPUT_DRAIN_LIMIT, RNG_SEED,
    SPLASH_DELAY_US, TICK_US,
};

/// Timing, input and layout settings for one run of the game loop.
///
/// [`Default`] is the reference firmware configuration. Hosts only override
/// what their display needs, e.g. a larger cell percentage on a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    /// Stall between ticks, in microseconds.
    pub tick_us: u64,
    /// How long the last frame stays up after a win or loss.
    pub end_delay_us: u64,
    /// How long the logo splash is shown before the first tick. Zero skips it.
    pub splash_delay_us: u64,
    /// Upper bound on key reads per tick.
    pub input_drain_limit: usize,
    /// Cell side as a percentage of the display width.
    pub cell_occupancy_percent: usize,
    pub seed: u64,
    pub initial_heading: Direction,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            tick_us: TICK_US,
            end_delay_us: END_DELAY_US,
            splash_delay_us: SPLASH_DELAY_US,
            input_drain_limit: INPUT_DRAIN_LIMIT,
            cell_occupancy_percent: CELL_PERCENTAGE_SCREEN_OCCUPANCY,
            seed: RNG_SEED,
            initial_heading: Direction::Up,
        }
    }
}
