//! Minimal BMP decoder for hosts without `std`.
//!
//! Handles uncompressed 24- and 32-bit bitmaps, bottom-up or top-down,
//! which is what the bundled assets use.

use alloc::vec::Vec;
use core::fmt;

use crate::display::ImageDecoder;
use crate::fb::DecodedImage;
use crate::types::Pixel;

const FILE_HEADER_LEN: usize = 14;
const INFO_HEADER_MIN_LEN: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmpError {
    Truncated,
    NotABitmap,
    Compressed(u32),
    UnsupportedDepth(u16),
    EmptyImage,
}

impl fmt::Display for BmpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BmpError::Truncated => f.write_str("bitmap data is truncated"),
            BmpError::NotABitmap => f.write_str("missing BM signature"),
            BmpError::Compressed(kind) => write!(f, "compression {} is not supported", kind),
            BmpError::UnsupportedDepth(bits) => write!(f, "{} bits per pixel is not supported", bits),
            BmpError::EmptyImage => f.write_str("bitmap has no pixels"),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BmpDecoder;

impl ImageDecoder for BmpDecoder {
    type Error = BmpError;

    fn decode(&self, data: &[u8]) -> Result<DecodedImage, BmpError> {
        if data.len() < FILE_HEADER_LEN + INFO_HEADER_MIN_LEN {
            return Err(BmpError::Truncated);
        }
        if &data[0..2] != b"BM" {
            return Err(BmpError::NotABitmap);
        }

        let pixel_offset = read_u32(data, 10) as usize;
        let raw_width = read_i32(data, 18);
        let raw_height = read_i32(data, 22);
        let bits = read_u16(data, 28);
        let compression = read_u32(data, 30);

        // BI_RGB, or BI_BITFIELDS with the usual 32-bit layout
        if compression != 0 && !(compression == 3 && bits == 32) {
            return Err(BmpError::Compressed(compression));
        }
        let bytes_per_pixel: usize = match bits {
            24 => 3,
            32 => 4,
            other => return Err(BmpError::UnsupportedDepth(other)),
        };

        let width = raw_width.unsigned_abs() as usize;
        let height = raw_height.unsigned_abs() as usize;
        if width == 0 || height == 0 {
            return Err(BmpError::EmptyImage);
        }
        let top_down = raw_height < 0;

        // Rows are padded to a multiple of four bytes. Sizes that overflow
        // cannot fit in `data` either.
        let row_len = width.checked_mul(bytes_per_pixel).ok_or(BmpError::Truncated)?;
        let stride = row_len.checked_add(3).ok_or(BmpError::Truncated)? & !3;
        let end = stride
            .checked_mul(height)
            .and_then(|len| len.checked_add(pixel_offset))
            .ok_or(BmpError::Truncated)?;
        if end > data.len() {
            return Err(BmpError::Truncated);
        }

        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            let src_row = if top_down { y } else { height - 1 - y };
            let row = &data[pixel_offset + src_row * stride..][..row_len];
            pixels.extend(
                row.chunks_exact(bytes_per_pixel)
                    .map(|bgr| Pixel::rgb(bgr[2], bgr[1], bgr[0])),
            );
        }

        Ok(DecodedImage::new(width, height, pixels))
    }
}

fn read_u16(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

fn read_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

fn read_i32(data: &[u8], at: usize) -> i32 {
    read_u32(data, at) as i32
}
