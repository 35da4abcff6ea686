//! Game state module - the grid engine
//!
//! Owns the canonical state of one game (grid, snake body, score, status and
//! the apple generator) and advances it one step per tick. The grid and the
//! snake body always describe the same set of cells.

use core::fmt;

use tracing::{debug, info};

use crate::grid::{next_cell, Grid};
use crate::rng::XorShiftRng;
use crate::snake::Snake;
use crate::types::{
    cell_index, CellIndex, CellState, Direction, GameStatus, APPLE_REWARD, CELLS_PER_AXIS,
    GRID_CELL_COUNT, SNAKE_INITIAL_LENGTH,
};

/// Result of a successful [`GameState::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The snake moved without eating.
    Moved,
    /// The snake ate an apple; `apple` is the newly placed one.
    Grew { apple: Option<CellIndex> },
    /// The snake ate the last apple and now fills the grid.
    Won,
}

/// Why [`GameState::advance`] refused to move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    /// The new head landed on the body. The grid is left as it was before the step.
    SelfCollision { cell: CellIndex },
    /// The game already ended.
    Finished(GameStatus),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::SelfCollision { cell } => {
                write!(f, "snake ran into itself at cell {}", cell)
            }
            StepError::Finished(status) => write!(f, "game already finished ({:?})", status),
        }
    }
}

/// Rejected hand-built layout, see [`GameState::from_layout`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    EmptySnake,
    OutOfGrid(CellIndex),
    Overlap(CellIndex),
    /// Two consecutive body segments are not one step apart.
    Detached { from: CellIndex, to: CellIndex },
    /// Free cells remain but no apple was given.
    MissingApple,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::EmptySnake => f.write_str("snake has no cells"),
            LayoutError::OutOfGrid(cell) => write!(f, "cell {} is outside the grid", cell),
            LayoutError::Overlap(cell) => write!(f, "cell {} is used twice", cell),
            LayoutError::Detached { from, to } => {
                write!(f, "segment {} does not touch segment {}", to, from)
            }
            LayoutError::MissingApple => f.write_str("grid has free cells but no apple"),
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    snake: Snake,
    score: u32,
    status: GameStatus,
    rng: XorShiftRng,
}

impl GameState {
    /// Create a new game with the given RNG seed
    ///
    /// The snake starts as a horizontal segment whose head is the center cell,
    /// and one apple is placed at random.
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            grid: Grid::new(),
            snake: Snake::from_cells(&initial_body()),
            score: 0,
            status: GameStatus::Running,
            rng: XorShiftRng::new(seed),
        };
        state.reset_board();
        state
    }

    /// Build a running game from an explicit body (head first) and apple.
    ///
    /// Intended for scenarios and tests; the generator is only used for the
    /// apples placed after this one. Consecutive segments must be one step
    /// apart, and an apple is required unless the body fills the grid.
    pub fn from_layout(
        body: &[CellIndex],
        apple: Option<CellIndex>,
        seed: u64,
    ) -> Result<Self, LayoutError> {
        if body.is_empty() {
            return Err(LayoutError::EmptySnake);
        }

        let mut grid = Grid::new();
        for &cell in body.iter().chain(apple.iter()) {
            if cell as usize >= GRID_CELL_COUNT {
                return Err(LayoutError::OutOfGrid(cell));
            }
            if grid.get(cell) != CellState::Empty {
                return Err(LayoutError::Overlap(cell));
            }
            grid.set(cell, CellState::Snake);
        }
        for pair in body.windows(2) {
            if !Direction::ALL.iter().any(|&d| next_cell(pair[0], d) == pair[1]) {
                return Err(LayoutError::Detached {
                    from: pair[0],
                    to: pair[1],
                });
            }
        }

        match apple {
            Some(cell) => grid.set(cell, CellState::Apple),
            None if body.len() < GRID_CELL_COUNT => return Err(LayoutError::MissingApple),
            None => {}
        }

        Ok(Self {
            grid,
            snake: Snake::from_cells(body),
            score: 0,
            status: GameStatus::Running,
            rng: XorShiftRng::new(seed),
        })
    }

    /// Start over with the initial snake, a zero score and a fresh apple.
    ///
    /// The generator keeps its stream; it is only seeded once.
    pub fn restart(&mut self) {
        self.reset_board();
        info!("game restarted");
    }

    fn reset_board(&mut self) {
        self.grid.clear();
        self.snake = Snake::from_cells(&initial_body());
        for &cell in self.snake.cells() {
            self.grid.set(cell, CellState::Snake);
        }
        self.score = 0;
        self.status = GameStatus::Running;
        self.spawn_apple();
    }

    /// Place one apple uniformly among the empty cells.
    ///
    /// Returns `None` when the grid has no empty cell left, which only
    /// happens once the snake fills it.
    pub fn spawn_apple(&mut self) -> Option<CellIndex> {
        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let chosen = self.rng.next_range(empty.len() as u32) as usize;
        let cell = empty[chosen];
        self.grid.set(cell, CellState::Apple);
        Some(cell)
    }

    /// Advance the snake one cell in `direction`
    ///
    /// Rejecting a 180° turn is the caller's job. The tail is vacated before
    /// the collision check, so moving into the cell the tail is leaving this
    /// same step is legal.
    pub fn advance(&mut self, direction: Direction) -> Result<Step, StepError> {
        if self.status != GameStatus::Running {
            return Err(StepError::Finished(self.status));
        }

        let new_head = next_cell(self.snake.head(), direction);

        if self.grid.is_apple(new_head) {
            self.snake.grow(new_head);
            self.grid.set(new_head, CellState::Snake);
            self.score += APPLE_REWARD;

            let apple = self.spawn_apple();
            debug!(cell = new_head, length = self.snake.len(), score = self.score, "apple eaten");

            if self.snake.len() == GRID_CELL_COUNT {
                self.status = GameStatus::Won;
                info!(score = self.score, "grid full");
                return Ok(Step::Won);
            }
            return Ok(Step::Grew { apple });
        }

        let old_tail = self.snake.tail();
        self.grid.set(old_tail, CellState::Empty);

        if self.grid.is_snake(new_head) {
            // The move did not happen
            self.grid.set(old_tail, CellState::Snake);
            self.status = GameStatus::Lost;
            info!(cell = new_head, score = self.score, "self collision");
            return Err(StepError::SelfCollision { cell: new_head });
        }

        self.snake.slide(new_head);
        self.grid.set(new_head, CellState::Snake);
        Ok(Step::Moved)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn head(&self) -> CellIndex {
        self.snake.head()
    }

    pub fn tail(&self) -> CellIndex {
        self.snake.tail()
    }

    pub fn apple(&self) -> Option<CellIndex> {
        self.grid.apple()
    }
}

/// Horizontal starting segment: head on the center cell, body to its left.
fn initial_body() -> [CellIndex; SNAKE_INITIAL_LENGTH] {
    let spawn = cell_index(CELLS_PER_AXIS / 2, CELLS_PER_AXIS / 2);
    let mut body = [0; SNAKE_INITIAL_LENGTH];
    for (i, cell) in body.iter_mut().enumerate() {
        *cell = spawn - i as CellIndex;
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_layout() {
        let game = GameState::new(1);
        assert_eq!(game.snake().cells(), &[40, 39, 38, 37, 36]);
        assert_eq!(game.grid().count(CellState::Snake), SNAKE_INITIAL_LENGTH);
        assert_eq!(game.grid().count(CellState::Apple), 1);
        assert_eq!(game.score(), 0);
        assert_eq!(game.status(), GameStatus::Running);
    }

    #[test]
    fn test_up_step_vacates_tail() {
        let mut game = GameState::from_layout(&[40, 39, 38, 37, 36], Some(0), 1).unwrap();
        assert_eq!(game.advance(Direction::Up), Ok(Step::Moved));
        assert_eq!(game.snake().cells(), &[31, 40, 39, 38, 37]);
        assert_eq!(game.grid().get(36), CellState::Empty);
        assert_eq!(game.grid().get(31), CellState::Snake);
    }

    #[test]
    fn test_left_into_neck_is_a_collision() {
        let mut game = GameState::from_layout(&[40, 39, 38, 37, 36], Some(0), 1).unwrap();
        let before = game.grid().clone();
        assert_eq!(
            game.advance(Direction::Left),
            Err(StepError::SelfCollision { cell: 39 })
        );
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.grid(), &before);
        assert_eq!(game.snake().cells(), &[40, 39, 38, 37, 36]);
    }

    #[test]
    fn test_finished_game_rejects_steps() {
        let mut game = GameState::from_layout(&[40, 39, 38, 37, 36], Some(0), 1).unwrap();
        let _ = game.advance(Direction::Left);
        assert_eq!(
            game.advance(Direction::Up),
            Err(StepError::Finished(GameStatus::Lost))
        );
    }

    #[test]
    fn test_catching_own_tail_is_legal() {
        // 2x2 loop: head 0, then 1, 10, 9 (tail). Moving down from 0 enters 9.
        let mut game = GameState::from_layout(&[0, 1, 10, 9], Some(80), 1).unwrap();
        assert_eq!(game.advance(Direction::Down), Ok(Step::Moved));
        assert_eq!(game.snake().cells(), &[9, 0, 1, 10]);
        assert_eq!(game.grid().count(CellState::Snake), 4);
    }

    #[test]
    fn test_layout_rejects_overlap() {
        assert_eq!(
            GameState::from_layout(&[1, 2, 1], None, 1).unwrap_err(),
            LayoutError::Overlap(1)
        );
        assert_eq!(
            GameState::from_layout(&[1, 2], Some(2), 1).unwrap_err(),
            LayoutError::Overlap(2)
        );
        assert_eq!(
            GameState::from_layout(&[81], None, 1).unwrap_err(),
            LayoutError::OutOfGrid(81)
        );
        assert_eq!(
            GameState::from_layout(&[], None, 1).unwrap_err(),
            LayoutError::EmptySnake
        );
    }

    #[test]
    fn test_layout_rejects_detached_segments() {
        assert_eq!(
            GameState::from_layout(&[40, 39, 20], Some(0), 1).unwrap_err(),
            LayoutError::Detached { from: 39, to: 20 }
        );
        // Diagonal neighbours are not adjacent either
        assert_eq!(
            GameState::from_layout(&[40, 30], Some(0), 1).unwrap_err(),
            LayoutError::Detached { from: 40, to: 30 }
        );
        // Linear wrap counts as a step
        assert!(GameState::from_layout(&[9, 8], Some(0), 1).is_ok());
    }

    #[test]
    fn test_layout_requires_an_apple_while_cells_are_free() {
        assert_eq!(
            GameState::from_layout(&[40, 39], None, 1).unwrap_err(),
            LayoutError::MissingApple
        );

        let full: [CellIndex; GRID_CELL_COUNT] = core::array::from_fn(|i| (80 - i) as CellIndex);
        let game = GameState::from_layout(&full, None, 1).unwrap();
        assert_eq!(game.apple(), None);
        assert_eq!(game.snake().len(), GRID_CELL_COUNT);
    }

    #[test]
    fn test_restart_resets_score_and_status() {
        let mut game = GameState::from_layout(&[40, 39], Some(41), 7).unwrap();
        assert!(matches!(game.advance(Direction::Right), Ok(Step::Grew { .. })));
        assert_eq!(game.score(), APPLE_REWARD);

        game.restart();
        assert_eq!(game.score(), 0);
        assert_eq!(game.status(), GameStatus::Running);
        assert_eq!(game.snake().len(), SNAKE_INITIAL_LENGTH);
        assert_eq!(game.grid().count(CellState::Apple), 1);
    }
}
