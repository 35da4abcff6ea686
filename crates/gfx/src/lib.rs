//! Software compositor and scene rendering.
//!
//! This is a small, game-oriented rendering layer for boot firmware. Nothing
//! here touches hardware: all draw operations land in an off-screen
//! [`PixelBuffer`] owned by the [`Compositor`], and the finished frame is
//! handed to a host [`Display`] in a single blit.
//!
//! Every frame is drawn from scratch in a fixed order. Writes outside the
//! buffer are geometry bugs and panic.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod assets;
pub mod bitmap_cache;
pub mod bmp;
pub mod compositor;
pub mod display;
pub mod error;
pub mod fb;
pub mod scene;

pub use uefi_snake_types as types;

pub use bitmap_cache::{BitmapCache, CacheFull, EncodedImage, ImageId};
pub use compositor::{Anchor, Compositor};
pub use display::{Display, ImageDecoder};
pub use error::GfxError;
pub use fb::{DecodedImage, PixelBuffer};
pub use scene::{GridLayout, Palette, SceneRenderer};
