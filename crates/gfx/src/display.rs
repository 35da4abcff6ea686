//! Host services the compositor draws through.
//!
//! Both are provided by whatever runs the game: the firmware graphics output
//! and image protocols on real hardware, a terminal on a desktop, or a plain
//! in-memory recorder in tests.

use core::fmt;

use crate::fb::DecodedImage;
use crate::types::Pixel;

/// A physical display that accepts whole-frame blits.
pub trait Display {
    type Error: fmt::Display;

    /// Active mode resolution as `(width, height)` in pixels.
    fn resolution(&self) -> (usize, usize);

    /// Copy a `width`x`height` row-major frame to the screen in one call.
    fn blt(&mut self, pixels: &[Pixel], width: usize, height: usize) -> Result<(), Self::Error>;
}

/// Turns encoded bitmap bytes into pixels.
pub trait ImageDecoder {
    type Error: fmt::Display;

    fn decode(&self, encoded: &[u8]) -> Result<DecodedImage, Self::Error>;
}

impl<D: Display + ?Sized> Display for &mut D {
    type Error = D::Error;

    fn resolution(&self) -> (usize, usize) {
        (**self).resolution()
    }

    fn blt(&mut self, pixels: &[Pixel], width: usize, height: usize) -> Result<(), Self::Error> {
        (**self).blt(pixels, width, height)
    }
}
