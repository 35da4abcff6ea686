use alloc::string::String;
use core::fmt;

use crate::bitmap_cache::ImageId;

/// Failures reported by the compositor and scene setup.
///
/// Out-of-bounds rectangle writes are not listed here: they panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GfxError {
    /// The display reported a zero-sized mode.
    EmptyDisplay,
    /// The off-screen buffer could not be allocated.
    BufferAllocation { width: usize, height: usize },
    /// The grid (plus its closing border) does not fit on the display.
    GridDoesNotFit {
        side: usize,
        width: usize,
        height: usize,
    },
    /// A cell would be no larger than the border drawn around it.
    CellTooSmall { cell: usize, border: usize },
    Decode { image: ImageId, reason: String },
    BitmapOutOfBounds {
        image: ImageId,
        width: usize,
        height: usize,
    },
    Present(String),
}

impl fmt::Display for GfxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GfxError::EmptyDisplay => f.write_str("display reports a 0x0 mode"),
            GfxError::BufferAllocation { width, height } => {
                write!(f, "cannot allocate a {}x{} pixel buffer", width, height)
            }
            GfxError::GridDoesNotFit {
                side,
                width,
                height,
            } => write!(
                f,
                "grid of {} px does not fit a {}x{} display",
                side, width, height
            ),
            GfxError::CellTooSmall { cell, border } => {
                write!(f, "cell of {} px leaves nothing inside a {} px border", cell, border)
            }
            GfxError::Decode { image, reason } => {
                write!(f, "failed to decode image '{}': {}", image.0, reason)
            }
            GfxError::BitmapOutOfBounds {
                image,
                width,
                height,
            } => write!(
                f,
                "image '{}' ({}x{}) does not fit at the requested position",
                image.0, width, height
            ),
            GfxError::Present(reason) => write!(f, "present failed: {}", reason),
        }
    }
}
