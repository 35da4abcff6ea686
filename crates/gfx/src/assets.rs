//! Bitmaps compiled into the binary.

use crate::bitmap_cache::{EncodedImage, ImageId};

/// 32x32 24-bit BMP drawn centered behind the grid.
pub const LOGO: EncodedImage<'static> = EncodedImage {
    id: ImageId("logo"),
    bytes: include_bytes!("../../../assets/logo.bmp"),
};
