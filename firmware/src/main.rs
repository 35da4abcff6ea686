//! UEFI entry point.
//!
//! Locates the graphics output, sets up the compositor and runs the game
//! loop until the player wins, loses or presses Escape.

#![no_std]
#![no_main]

extern crate alloc;

mod gop;
mod services;

use uefi::prelude::*;
use uefi::println;
use uefi::proto::console::gop::GraphicsOutput;
use uefi::table::boot::{OpenProtocolAttributes, OpenProtocolParams};

use uefi_snake_engine::{GameLoop, LoopConfig};
use uefi_snake_gfx::{assets::LOGO, bmp::BmpDecoder, Compositor};

use gop::GopDisplay;
use services::UefiFirmware;

#[entry]
fn main(image_handle: Handle, mut system_table: SystemTable<Boot>) -> Status {
    if uefi::helpers::init(&mut system_table).is_err() {
        return Status::ABORTED;
    }

    // The console and keyboard are used while the GOP stays open, so the
    // firmware services get their own handle on the system table.
    let mut firmware = UefiFirmware::new(unsafe { system_table.unsafe_clone() });
    let boot_services = system_table.boot_services();

    // Opened shared: the text console keeps drawing on the same GOP.
    let gop = match boot_services
        .get_handle_for_protocol::<GraphicsOutput>()
        .and_then(|handle| unsafe {
            boot_services.open_protocol::<GraphicsOutput>(
                OpenProtocolParams {
                    handle,
                    agent: image_handle,
                    controller: None,
                },
                OpenProtocolAttributes::GetProtocol,
            )
        }) {
        Ok(gop) => gop,
        Err(e) => {
            println!("No graphics output available: {:?}", e.status());
            return Status::ABORTED;
        }
    };

    let display = GopDisplay::new(gop);
    let mode = display.mode_info();
    let (width, height) = mode.resolution();
    println!(
        "Mode: {}x{}, stride {}, format {:?}",
        width,
        height,
        mode.stride(),
        mode.pixel_format()
    );

    let mut compositor = match Compositor::new(display) {
        Ok(compositor) => compositor,
        Err(e) => {
            println!("Display setup failed: {}", e);
            return Status::ABORTED;
        }
    };

    let mut game = match GameLoop::new(LoopConfig::default(), &compositor) {
        Ok(game) => game.with_logo(LOGO),
        Err(e) => {
            println!("Cannot lay out the grid: {}", e);
            return Status::ABORTED;
        }
    };

    match game.run(&mut firmware, &mut compositor, &BmpDecoder) {
        Ok(outcome) => {
            log::info!("game ended: {:?}", outcome);
            Status::SUCCESS
        }
        Err(e) => {
            println!("Game aborted: {}", e);
            Status::ABORTED
        }
    }
}
