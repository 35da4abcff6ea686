//! Terminal snake runner (default binary).
//!
//! Runs the firmware game loop unchanged against a terminal host: the pixel
//! frame is drawn with half blocks and console text sits above it.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing::{info, Level};

use uefi_snake::engine::{GameLoop, LoopConfig};
use uefi_snake::gfx::{assets::LOGO, Compositor};
use uefi_snake::term::{BmpDecoder, HostConfig, TerminalDisplay, TerminalFirmware};
use uefi_snake::types::Outcome;

fn main() -> Result<()> {
    let config = HostConfig::from_env();
    setup_logging(&config)?;

    let mut display = TerminalDisplay::new(config.status_rows)?;
    display.enter()?;

    let result = run(&config, &mut display);

    // Always try to restore terminal state.
    let _ = display.exit();

    let outcome = result?;
    info!(?outcome, "exiting");
    match outcome {
        Outcome::Won => println!("You won!"),
        Outcome::Lost => println!("Game over."),
        Outcome::Aborted => println!("Bye."),
    }
    Ok(())
}

fn run(config: &HostConfig, display: &mut TerminalDisplay) -> Result<Outcome> {
    let mut compositor =
        Compositor::new(display).map_err(|e| anyhow!("display setup failed: {}", e))?;

    let loop_config = LoopConfig {
        cell_occupancy_percent: config.cell_percent,
        ..LoopConfig::default()
    };
    let mut game = GameLoop::new(loop_config, &compositor)
        .map_err(|e| anyhow!("terminal too small: {}", e))?
        .with_logo(LOGO);

    let mut firmware = TerminalFirmware::new(config.status_rows);
    game.run(&mut firmware, &mut compositor, &BmpDecoder)
        .map_err(|e| anyhow!("game loop failed: {}", e))
}

/// Log to `SNAKE_LOG_PATH` when set. The terminal itself is the game screen,
/// so nothing is ever logged to stdout or stderr.
fn setup_logging(config: &HostConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };

    let file = File::create(path).with_context(|| format!("failed to create log file {}", path))?;
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .compact()
        .init();
    Ok(())
}
