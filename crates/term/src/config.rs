//! Host configuration read from the environment.

use std::env;

use crate::types::CELL_PERCENTAGE_SCREEN_OCCUPANCY;

/// Rows at the top of the terminal reserved for console text.
pub const STATUS_ROWS: u16 = 3;

/// Cell occupancy used on terminals. Terminal pixels are coarse, so cells
/// take a larger share of the width than on a firmware display.
pub const TERMINAL_CELL_PERCENT: usize = 2 * CELL_PERCENTAGE_SCREEN_OCCUPANCY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// `SNAKE_CELL_PERCENT`: cell size as a percentage of the pixel width.
    pub cell_percent: usize,
    /// `SNAKE_LOG_PATH`: write tracing output to this file. Unset disables logging.
    pub log_path: Option<String>,
    pub status_rows: u16,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            cell_percent: TERMINAL_CELL_PERCENT,
            log_path: None,
            status_rows: STATUS_ROWS,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any variable source. Values are trimmed;
    /// out-of-range or unparsable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let cell_percent = lookup("SNAKE_CELL_PERCENT")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&p: &usize| p > 0 && p <= 100)
            .unwrap_or(TERMINAL_CELL_PERCENT);

        let log_path = lookup("SNAKE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            cell_percent,
            log_path,
            ..Self::default()
        }
    }
}
