//! TerminalDisplay: shows the compositor's pixel frames in a real terminal.
//!
//! Each terminal cell renders two vertically stacked pixels with an upper
//! half block: the foreground color is the top pixel, the background color
//! the bottom one. The top `status_rows` rows are left to the console.

use std::io::{self, Write};

use anyhow::{anyhow, Result};

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use uefi_snake_gfx::Display;

use crate::types::Pixel;

const HALF_BLOCK: char = '▀';

pub struct TerminalDisplay {
    stdout: io::Stdout,
    width: usize,
    height: usize,
    status_rows: u16,
    last: Option<Vec<Pixel>>,
    buf: Vec<u8>,
}

impl TerminalDisplay {
    /// Size the pixel surface to the current terminal, minus the status rows.
    pub fn new(status_rows: u16) -> Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self::with_size(cols, rows, status_rows))
    }

    pub fn with_size(cols: u16, rows: u16, status_rows: u16) -> Self {
        Self {
            stdout: io::stdout(),
            width: cols as usize,
            height: rows.saturating_sub(status_rows) as usize * 2,
            status_rows,
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next present to redraw every cell.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Display for TerminalDisplay {
    type Error = anyhow::Error;

    fn resolution(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn blt(&mut self, pixels: &[Pixel], width: usize, height: usize) -> Result<()> {
        if width != self.width || height != self.height || pixels.len() != width * height {
            return Err(anyhow!(
                "frame is {}x{} ({} pixels), display is {}x{}",
                width,
                height,
                pixels.len(),
                self.width,
                self.height
            ));
        }

        self.buf.clear();
        encode_frame_into(
            self.last.as_deref(),
            pixels,
            width,
            height,
            self.status_rows,
            &mut self.buf,
        )?;
        self.flush_buf()?;

        match self.last.as_mut() {
            Some(prev) => prev.copy_from_slice(pixels),
            None => self.last = Some(pixels.to_vec()),
        }
        Ok(())
    }
}

/// Encode the cells of `next` that differ from `prev` (all of them when
/// `prev` is `None`) as runs of half blocks into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_frame_into(
    prev: Option<&[Pixel]>,
    next: &[Pixel],
    width: usize,
    height: usize,
    row_offset: u16,
    out: &mut Vec<u8>,
) -> Result<()> {
    let mut current: Option<(Pixel, Pixel)> = None;
    let mut cursor_at: Option<(usize, usize)> = None;

    for row in 0..height / 2 {
        for x in 0..width {
            let cell = half_block(next, width, x, row);
            if let Some(prev) = prev {
                if half_block(prev, width, x, row) == cell {
                    continue;
                }
            }

            if cursor_at != Some((x, row)) {
                out.queue(cursor::MoveTo(x as u16, row as u16 + row_offset))?;
            }
            if current != Some(cell) {
                out.queue(SetForegroundColor(pixel_to_color(cell.0)))?;
                out.queue(SetBackgroundColor(pixel_to_color(cell.1)))?;
                current = Some(cell);
            }
            out.queue(Print(HALF_BLOCK))?;
            cursor_at = Some((x + 1, row));
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

#[inline(always)]
fn half_block(pixels: &[Pixel], width: usize, x: usize, row: usize) -> (Pixel, Pixel) {
    let top = pixels[(row * 2) * width + x];
    let bottom = pixels[(row * 2 + 1) * width + x];
    (top, bottom)
}

fn pixel_to_color(p: Pixel) -> Color {
    Color::Rgb {
        r: p.red,
        g: p.green,
        b: p.blue,
    }
}
