//! Compositor: accumulates draw operations into an off-screen buffer and
//! presents the finished frame to the display in one blit.

use alloc::string::ToString;

use tracing::{info, warn};

use crate::bitmap_cache::{BitmapCache, CacheFull, EncodedImage, ImageId};
use crate::display::{Display, ImageDecoder};
use crate::error::GfxError;
use crate::fb::{DecodedImage, PixelBuffer};
use crate::types::Pixel;

/// Where a bitmap goes on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Top-left corner at (`x`, `y`).
    At { x: usize, y: usize },
    /// Centered on the display.
    Center,
}

pub struct Compositor<D: Display> {
    display: D,
    buffer: PixelBuffer,
    cache: BitmapCache,
    background: Pixel,
}

impl<D: Display> Compositor<D> {
    /// Query the display mode and allocate a matching buffer.
    pub fn new(display: D) -> Result<Self, GfxError> {
        Self::with_background(display, Pixel::BLACK)
    }

    pub fn with_background(display: D, background: Pixel) -> Result<Self, GfxError> {
        let (width, height) = display.resolution();
        if width == 0 || height == 0 {
            return Err(GfxError::EmptyDisplay);
        }

        let buffer = PixelBuffer::try_new(width, height, background)
            .map_err(|_| GfxError::BufferAllocation { width, height })?;
        info!(width, height, "compositor buffer allocated");

        Ok(Self {
            display,
            buffer,
            cache: BitmapCache::new(),
            background,
        })
    }

    pub fn resolution(&self) -> (usize, usize) {
        (self.buffer.width(), self.buffer.height())
    }

    pub fn background(&self) -> Pixel {
        self.background
    }

    /// Fill an axis-aligned rectangle.
    ///
    /// Panics if any part of it lies outside the buffer.
    pub fn draw_rectangle(&mut self, color: Pixel, width: usize, height: usize, x: usize, y: usize) {
        self.buffer.fill_rect(x, y, width, height, color);
    }

    /// Fill the whole buffer with the background color.
    pub fn clear(&mut self) {
        let (width, height) = self.resolution();
        self.draw_rectangle(self.background, width, height, 0, 0);
    }

    /// Blit a bitmap, decoding it on first use.
    ///
    /// Decoded images go into the bitmap cache. When the cache is full the
    /// image is drawn from a temporary copy that is dropped afterwards.
    pub fn draw_bitmap<I: ImageDecoder>(
        &mut self,
        decoder: &I,
        image: EncodedImage<'_>,
        anchor: Anchor,
    ) -> Result<(), GfxError> {
        if let Some(cached) = self.cache.lookup(image.id) {
            return blit_anchored(&mut self.buffer, image.id, cached, anchor);
        }

        let decoded = decoder.decode(image.bytes).map_err(|e| GfxError::Decode {
            image: image.id,
            reason: e.to_string(),
        })?;

        match self.cache.insert(image.id, decoded) {
            Ok(cached) => blit_anchored(&mut self.buffer, image.id, cached, anchor),
            Err(CacheFull(uncached)) => {
                warn!(image = image.id.0, "bitmap cache is full, drawing uncached");
                blit_anchored(&mut self.buffer, image.id, &uncached, anchor)
            }
        }
    }

    /// Copy the whole buffer to the display. Failures are reported, not retried.
    pub fn present(&mut self) -> Result<(), GfxError> {
        let (width, height) = self.resolution();
        self.display
            .blt(self.buffer.pixels(), width, height)
            .map_err(|e| GfxError::Present(e.to_string()))
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn cache(&self) -> &BitmapCache {
        &self.cache
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Give the display back, releasing the buffer and cached bitmaps.
    pub fn into_display(self) -> D {
        self.display
    }
}

fn blit_anchored(
    buffer: &mut PixelBuffer,
    id: ImageId,
    image: &DecodedImage,
    anchor: Anchor,
) -> Result<(), GfxError> {
    let out_of_bounds = || GfxError::BitmapOutOfBounds {
        image: id,
        width: image.width(),
        height: image.height(),
    };

    let (x, y) = match anchor {
        Anchor::At { x, y } => (x, y),
        Anchor::Center => (
            (buffer.width() / 2)
                .checked_sub(image.width() / 2)
                .ok_or_else(out_of_bounds)?,
            (buffer.height() / 2)
                .checked_sub(image.height() / 2)
                .ok_or_else(out_of_bounds)?,
        ),
    };

    if !buffer.contains_rect(x, y, image.width(), image.height()) {
        return Err(out_of_bounds());
    }
    buffer.blit(x, y, image);
    Ok(())
}
