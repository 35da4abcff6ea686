//! Snake body storage
//!
//! The body is an ordered list of cell indices, head first and tail last,
//! kept in a fixed-capacity array sized to the whole grid so that no move
//! ever reallocates.

use arrayvec::ArrayVec;

use crate::grid::next_cell;
use crate::types::{CellIndex, Direction, GRID_CELL_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: ArrayVec<CellIndex, GRID_CELL_COUNT>,
}

impl Snake {
    /// Create a snake from its cells, head first
    ///
    /// Panics if `cells` is empty or larger than the grid.
    pub fn from_cells(cells: &[CellIndex]) -> Self {
        assert!(!cells.is_empty(), "snake needs at least a head");
        let mut body = ArrayVec::new();
        body.extend(cells.iter().copied());
        Self { body }
    }

    pub fn head(&self) -> CellIndex {
        self.body[0]
    }

    pub fn tail(&self) -> CellIndex {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Occupied cells, head first
    pub fn cells(&self) -> &[CellIndex] {
        &self.body
    }

    pub fn contains(&self, cell: CellIndex) -> bool {
        self.body.contains(&cell)
    }

    /// Direction of the last step, from the neck to the head.
    ///
    /// `None` for a one-cell snake or a body whose first two cells do not touch.
    pub fn heading(&self) -> Option<Direction> {
        let (&head, &neck) = (self.body.first()?, self.body.get(1)?);
        Direction::ALL
            .into_iter()
            .find(|&d| next_cell(neck, d) == head)
    }

    /// Move one step: the tail is dropped and every segment slides toward the head.
    pub fn slide(&mut self, new_head: CellIndex) {
        self.body.pop();
        self.body.insert(0, new_head);
    }

    /// Move one step keeping the tail, so the snake grows by one.
    ///
    /// Panics if the snake already fills the grid.
    pub fn grow(&mut self, new_head: CellIndex) {
        self.body.insert(0, new_head);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_keeps_length() {
        let mut snake = Snake::from_cells(&[40, 39, 38]);
        snake.slide(31);
        assert_eq!(snake.cells(), &[31, 40, 39]);
        assert_eq!(snake.head(), 31);
        assert_eq!(snake.tail(), 39);
    }

    #[test]
    fn test_grow_keeps_tail() {
        let mut snake = Snake::from_cells(&[40, 39]);
        snake.grow(41);
        assert_eq!(snake.cells(), &[41, 40, 39]);
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_heading_follows_the_neck() {
        assert_eq!(Snake::from_cells(&[40, 39, 38]).heading(), Some(Direction::Right));
        assert_eq!(Snake::from_cells(&[31, 40]).heading(), Some(Direction::Up));
        // Wrapped steps count too
        assert_eq!(Snake::from_cells(&[72, 0]).heading(), Some(Direction::Up));
        assert_eq!(Snake::from_cells(&[0, 80]).heading(), Some(Direction::Right));
        assert_eq!(Snake::from_cells(&[40]).heading(), None);
    }

    #[test]
    fn test_single_cell_snake() {
        let mut snake = Snake::from_cells(&[0]);
        assert_eq!(snake.head(), snake.tail());
        snake.slide(1);
        assert_eq!(snake.cells(), &[1]);
    }
}
