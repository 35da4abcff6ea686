//! Off-screen pixel buffer and decoded images.

use alloc::collections::TryReserveError;
use alloc::vec::Vec;

use crate::types::Pixel;

/// Decoded bitmap: row-major pixels plus dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl DecodedImage {
    /// Wrap decoded pixels.
    ///
    /// Panics if `pixels.len() != width * height`; decoders produce exactly
    /// one pixel per position.
    pub fn new(width: usize, height: usize, pixels: Vec<Pixel>) -> Self {
        assert_eq!(
            pixels.len(),
            width * height,
            "decoded image is {}x{} but holds {} pixels",
            width,
            height,
            pixels.len()
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }
}

/// Pixel buffer sized to the display resolution.
///
/// Every write is bounds-checked. A write outside the buffer means some
/// geometry upstream is wrong, so it panics instead of clipping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Allocate a buffer, reporting allocation failure instead of aborting.
    pub fn try_new(width: usize, height: usize, fill: Pixel) -> Result<Self, TryReserveError> {
        let len = width.saturating_mul(height);
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len)?;
        pixels.resize(len, fill);
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    #[inline(always)]
    fn idx(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    /// True when a `w`x`h` region at (`x`, `y`) lies entirely inside the buffer.
    pub fn contains_rect(&self, x: usize, y: usize, w: usize, h: usize) -> bool {
        matches!(x.checked_add(w), Some(right) if right <= self.width)
            && matches!(y.checked_add(h), Some(bottom) if bottom <= self.height)
    }

    pub fn fill(&mut self, color: Pixel) {
        self.pixels.fill(color);
    }

    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Pixel) {
        assert!(
            self.contains_rect(x, y, w, h),
            "rectangle {}x{} at ({}, {}) exceeds {}x{} buffer",
            w,
            h,
            x,
            y,
            self.width,
            self.height
        );
        for row in y..y + h {
            let start = row * self.width + x;
            self.pixels[start..start + w].fill(color);
        }
    }

    /// Copy `image` with its top-left corner at (`x`, `y`).
    pub fn blit(&mut self, x: usize, y: usize, image: &DecodedImage) {
        assert!(
            self.contains_rect(x, y, image.width, image.height),
            "bitmap {}x{} at ({}, {}) exceeds {}x{} buffer",
            image.width,
            image.height,
            x,
            y,
            self.width,
            self.height
        );
        for (row, src) in image.pixels.chunks_exact(image.width.max(1)).enumerate() {
            let start = (y + row) * self.width + x;
            self.pixels[start..start + image.width].copy_from_slice(src);
        }
    }
}
