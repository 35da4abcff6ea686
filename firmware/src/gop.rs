//! Graphics Output Protocol display.

use alloc::vec::Vec;

use uefi::proto::console::gop::{BltOp, BltPixel, BltRegion, GraphicsOutput};
use uefi::table::boot::ScopedProtocol;

use uefi_snake_gfx::Display;
use uefi_snake_types::Pixel;

pub struct GopDisplay<'a> {
    gop: ScopedProtocol<'a, GraphicsOutput>,
    width: usize,
    height: usize,
    staging: Vec<BltPixel>,
}

impl<'a> GopDisplay<'a> {
    pub fn new(gop: ScopedProtocol<'a, GraphicsOutput>) -> Self {
        let (width, height) = gop.current_mode_info().resolution();
        Self {
            gop,
            width,
            height,
            staging: Vec::new(),
        }
    }

    pub fn mode_info(&self) -> uefi::proto::console::gop::ModeInfo {
        self.gop.current_mode_info()
    }
}

impl Display for GopDisplay<'_> {
    type Error = uefi::Error;

    fn resolution(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn blt(&mut self, pixels: &[Pixel], width: usize, height: usize) -> uefi::Result {
        // Reused across frames; only the first present allocates
        self.staging.clear();
        self.staging.extend(
            pixels
                .iter()
                .map(|p| BltPixel::new(p.red, p.green, p.blue)),
        );

        self.gop.blt(BltOp::BufferToVideo {
            buffer: &self.staging,
            src: BltRegion::Full,
            dest: (0, 0),
            dims: (width, height),
        })
    }
}
