//! BMP decoding through the `image` crate.

use image::{ImageError, ImageFormat};

use uefi_snake_gfx::{DecodedImage, ImageDecoder};

use crate::types::Pixel;

/// Decodes BMP resources into compositor pixels.
#[derive(Debug, Default, Clone, Copy)]
pub struct BmpDecoder;

impl ImageDecoder for BmpDecoder {
    type Error = ImageError;

    fn decode(&self, encoded: &[u8]) -> Result<DecodedImage, ImageError> {
        let rgb = image::load_from_memory_with_format(encoded, ImageFormat::Bmp)?.to_rgb8();
        let (width, height) = rgb.dimensions();
        let pixels = rgb
            .pixels()
            .map(|p| Pixel::rgb(p[0], p[1], p[2]))
            .collect();
        Ok(DecodedImage::new(width as usize, height as usize, pixels))
    }
}
