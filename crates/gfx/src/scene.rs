//! Scene renderer: maps engine state to compositor draw calls.
//!
//! Holds no game state. Draw order is background, logo, grid lines, snake
//! and apple cells, head, tail; later writes win.

use uefi_snake_core::GameState;

use crate::bitmap_cache::EncodedImage;
use crate::compositor::{Anchor, Compositor};
use crate::display::{Display, ImageDecoder};
use crate::error::GfxError;
use crate::types::{cell_x, cell_y, CellIndex, CellState, Pixel, CELLS_PER_AXIS, CELL_BORDER_SIZE};

/// Colors for each kind of grid content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub grid_line: Pixel,
    pub snake: Pixel,
    pub apple: Pixel,
    pub head: Pixel,
    pub tail: Pixel,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            grid_line: Pixel::rgb(60, 60, 60),
            snake: Pixel::rgb(11, 125, 0),
            apple: Pixel::rgb(255, 0, 0),
            head: Pixel::rgb(61, 175, 40),
            tail: Pixel::rgb(108, 8, 0),
        }
    }
}

/// Pixel geometry of the grid, derived once from the display size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Distance between two grid lines.
    pub cell_size: usize,
    /// `cell_size * CELLS_PER_AXIS`.
    pub side: usize,
    pub origin_x: usize,
    pub origin_y: usize,
    pub border: usize,
}

impl GridLayout {
    /// Size cells as `occupancy_percent` of the display width and center the grid.
    ///
    /// Fails when the grid, including its closing border lines, would not
    /// fit on the display.
    pub fn compute(width: usize, height: usize, occupancy_percent: usize) -> Result<Self, GfxError> {
        let border = CELL_BORDER_SIZE;
        let cell_size = width * occupancy_percent / 100;
        if cell_size <= border {
            return Err(GfxError::CellTooSmall {
                cell: cell_size,
                border,
            });
        }

        let side = cell_size * CELLS_PER_AXIS;
        let does_not_fit = || GfxError::GridDoesNotFit {
            side,
            width,
            height,
        };

        let origin_x = (width / 2)
            .checked_sub(side / 2 + 1)
            .ok_or_else(does_not_fit)?;
        let origin_y = (height / 2)
            .checked_sub(side / 2 + 1)
            .ok_or_else(does_not_fit)?;
        if origin_x + side + border > width || origin_y + side + border > height {
            return Err(does_not_fit());
        }

        Ok(Self {
            cell_size,
            side,
            origin_x,
            origin_y,
            border,
        })
    }

    /// Side of the colored square inside a cell.
    pub fn inner_size(&self) -> usize {
        self.cell_size - self.border
    }

    /// Top-left pixel of the colored square for `index`.
    pub fn cell_origin(&self, index: CellIndex) -> (usize, usize) {
        (
            self.origin_x + self.border + self.cell_size * cell_x(index),
            self.origin_y + self.border + self.cell_size * cell_y(index),
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SceneRenderer {
    layout: GridLayout,
    palette: Palette,
    logo: Option<EncodedImage<'static>>,
}

impl SceneRenderer {
    pub fn new(layout: GridLayout) -> Self {
        Self {
            layout,
            palette: Palette::default(),
            logo: None,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Draw `logo` centered behind the grid on every frame.
    pub fn with_logo(mut self, logo: EncodedImage<'static>) -> Self {
        self.logo = Some(logo);
        self
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Compose a full frame into the compositor buffer (not presented).
    pub fn render<D: Display, I: ImageDecoder>(
        &self,
        game: &GameState,
        compositor: &mut Compositor<D>,
        decoder: &I,
    ) -> Result<(), GfxError> {
        self.draw_backdrop(compositor, decoder)?;
        self.draw_grid(game, compositor);
        Ok(())
    }

    /// Background plus the centered logo, if any.
    pub fn draw_backdrop<D: Display, I: ImageDecoder>(
        &self,
        compositor: &mut Compositor<D>,
        decoder: &I,
    ) -> Result<(), GfxError> {
        compositor.clear();
        if let Some(logo) = self.logo {
            compositor.draw_bitmap(decoder, logo, Anchor::Center)?;
        }
        Ok(())
    }

    /// Grid lines, then cell contents, then head and tail highlights.
    pub fn draw_grid<D: Display>(&self, game: &GameState, compositor: &mut Compositor<D>) {
        let l = &self.layout;
        let line_len = l.side + l.border;

        for i in 0..=CELLS_PER_AXIS {
            compositor.draw_rectangle(
                self.palette.grid_line,
                line_len,
                l.border,
                l.origin_x,
                l.origin_y + i * l.cell_size,
            );
            compositor.draw_rectangle(
                self.palette.grid_line,
                l.border,
                line_len,
                l.origin_x + i * l.cell_size,
                l.origin_y,
            );
        }

        for (index, cell) in game.grid().cells().iter().enumerate() {
            let color = match cell {
                CellState::Snake => self.palette.snake,
                CellState::Apple => self.palette.apple,
                CellState::Empty => continue,
            };
            self.fill_cell(compositor, index as CellIndex, color);
        }

        self.fill_cell(compositor, game.head(), self.palette.head);
        self.fill_cell(compositor, game.tail(), self.palette.tail);
    }

    fn fill_cell<D: Display>(&self, compositor: &mut Compositor<D>, index: CellIndex, color: Pixel) {
        let (x, y) = self.layout.cell_origin(index);
        let size = self.layout.inner_size();
        compositor.draw_rectangle(color, size, size, x, y);
    }
}
