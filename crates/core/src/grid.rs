//! Grid module - the 9x9 cell matrix
//!
//! The grid is a flat, row-major array of cells addressed by a linear index.
//! It has no edges: a step is applied to the linear index modulo the cell
//! count, so leaving the top row lands on the bottom row and leaving a row
//! sideways lands on the neighbouring row.

use arrayvec::ArrayVec;

use crate::types::{CellIndex, CellState, Direction, GRID_CELL_COUNT};

/// Index a snake head moves to when stepping in `direction`
///
/// `(head + delta + N²) mod N²` with `delta` = ±1 or ±N.
///
/// # Examples
///
/// ```
/// use uefi_snake_core::grid::next_cell;
/// use uefi_snake_core::types::Direction;
///
/// assert_eq!(next_cell(40, Direction::Up), 31);
/// assert_eq!(next_cell(4, Direction::Up), 76);
/// assert_eq!(next_cell(80, Direction::Right), 0);
/// ```
#[inline(always)]
pub fn next_cell(head: CellIndex, direction: Direction) -> CellIndex {
    let count = GRID_CELL_COUNT as i32;
    ((head as i32 + direction.delta() + count) % count) as CellIndex
}

/// The game grid - one [`CellState`] per cell using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [CellState; GRID_CELL_COUNT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [CellState::Empty; GRID_CELL_COUNT],
        }
    }

    /// Cell state at `index`
    ///
    /// Panics if `index` is outside the grid; engine code only produces
    /// indices through [`next_cell`] and the snake body.
    #[inline(always)]
    pub fn get(&self, index: CellIndex) -> CellState {
        self.cells[index as usize]
    }

    #[inline(always)]
    pub fn set(&mut self, index: CellIndex, state: CellState) {
        self.cells[index as usize] = state;
    }

    pub fn is_snake(&self, index: CellIndex) -> bool {
        self.get(index) == CellState::Snake
    }

    pub fn is_apple(&self, index: CellIndex) -> bool {
        self.get(index) == CellState::Apple
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Number of cells currently holding `state`
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// First apple cell, if any
    pub fn apple(&self) -> Option<CellIndex> {
        self.cells
            .iter()
            .position(|&c| c == CellState::Apple)
            .map(|i| i as CellIndex)
    }

    /// Collect every empty cell index in one scan
    ///
    /// Stack-only scratch list sized to the worst case; does not allocate.
    pub fn empty_cells(&self) -> ArrayVec<CellIndex, GRID_CELL_COUNT> {
        let mut empty = ArrayVec::new();
        for (i, cell) in self.cells.iter().enumerate() {
            if *cell == CellState::Empty {
                empty.push(i as CellIndex);
            }
        }
        empty
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{cell_index, CELLS_PER_AXIS};

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new();
        assert_eq!(grid.count(CellState::Empty), GRID_CELL_COUNT);
        assert_eq!(grid.empty_cells().len(), GRID_CELL_COUNT);
        assert_eq!(grid.apple(), None);
    }

    #[test]
    fn test_set_and_query() {
        let mut grid = Grid::new();
        grid.set(10, CellState::Snake);
        grid.set(11, CellState::Apple);

        assert!(grid.is_snake(10));
        assert!(grid.is_apple(11));
        assert_eq!(grid.apple(), Some(11));
        assert_eq!(grid.empty_cells().len(), GRID_CELL_COUNT - 2);
        assert!(!grid.empty_cells().contains(&10));
    }

    #[test]
    fn test_vertical_steps_wrap_between_top_and_bottom_rows() {
        let n = CELLS_PER_AXIS;
        for x in 0..n {
            let top = cell_index(x, 0);
            let bottom = cell_index(x, n - 1);
            assert_eq!(next_cell(top, Direction::Up), bottom);
            assert_eq!(next_cell(bottom, Direction::Down), top);
        }
    }

    #[test]
    fn test_horizontal_steps_carry_into_neighbouring_row() {
        // Linear wrap: the end of one row continues on the next one.
        assert_eq!(next_cell(cell_index(8, 3), Direction::Right), cell_index(0, 4));
        assert_eq!(next_cell(cell_index(0, 4), Direction::Left), cell_index(8, 3));
    }

    #[test]
    fn test_corners_wrap_through_zero() {
        assert_eq!(next_cell(0, Direction::Left), 80);
        assert_eq!(next_cell(80, Direction::Right), 0);
        assert_eq!(next_cell(0, Direction::Up), 72);
        assert_eq!(next_cell(80, Direction::Down), 8);
    }

    proptest::proptest! {
        #[test]
        fn prop_step_then_reverse_is_identity(cell in 0u16..81, dir in 0usize..4) {
            let dir = Direction::ALL[dir];
            let back = next_cell(next_cell(cell, dir), dir.opposite());
            proptest::prop_assert_eq!(back, cell);
        }

        #[test]
        fn prop_next_cell_stays_on_the_grid(cell in 0u16..81, dir in 0usize..4) {
            proptest::prop_assert!((next_cell(cell, Direction::ALL[dir]) as usize) < GRID_CELL_COUNT);
        }
    }
}
