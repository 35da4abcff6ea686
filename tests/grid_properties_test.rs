//! Randomized invariants of the grid engine.

use proptest::prelude::*;

use uefi_snake::core::{next_cell, GameState, Step, StepError};
use uefi_snake::types::{
    CellState, Direction, GameStatus, APPLE_REWARD, GRID_CELL_COUNT, SNAKE_INITIAL_LENGTH,
};

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

fn check_invariants(game: &GameState) -> Result<(), TestCaseError> {
    let grid = game.grid();
    let body = game.snake().cells();

    prop_assert_eq!(grid.count(CellState::Snake), body.len());
    for &cell in body {
        prop_assert_eq!(grid.get(cell), CellState::Snake);
    }

    let mut seen = [false; GRID_CELL_COUNT];
    for &cell in body {
        prop_assert!(!seen[cell as usize], "cell {} appears twice in the body", cell);
        seen[cell as usize] = true;
    }

    // Consecutive segments are one step apart
    for pair in body.windows(2) {
        prop_assert!(
            Direction::ALL.iter().any(|&d| next_cell(pair[1], d) == pair[0]),
            "{} does not follow {}",
            pair[0],
            pair[1]
        );
    }

    let apples = grid.count(CellState::Apple);
    if body.len() < GRID_CELL_COUNT {
        prop_assert_eq!(apples, 1);
    } else {
        prop_assert_eq!(apples, 0);
    }

    let eaten = (body.len() - SNAKE_INITIAL_LENGTH) as u32;
    prop_assert_eq!(game.score(), eaten * APPLE_REWARD);
    Ok(())
}

proptest! {
    #[test]
    fn grid_and_body_stay_in_sync(
        seed in any::<u64>(),
        moves in prop::collection::vec(direction(), 1..300),
    ) {
        let mut game = GameState::new(seed);
        let mut heading = Direction::Up;
        check_invariants(&game)?;

        for requested in moves {
            if !requested.is_reverse_of(heading) {
                heading = requested;
            }

            let before = game.grid().clone();
            let len = game.snake().len();
            match game.advance(heading) {
                Ok(Step::Moved) => prop_assert_eq!(game.snake().len(), len),
                Ok(Step::Grew { .. }) => prop_assert_eq!(game.snake().len(), len + 1),
                Ok(Step::Won) => {
                    prop_assert_eq!(game.snake().len(), GRID_CELL_COUNT);
                    check_invariants(&game)?;
                    break;
                }
                Err(StepError::SelfCollision { .. }) => {
                    prop_assert_eq!(game.status(), GameStatus::Lost);
                    prop_assert_eq!(game.grid(), &before);
                    break;
                }
                Err(StepError::Finished(status)) => {
                    prop_assert!(false, "advance on a finished game ({:?})", status);
                }
            }
            check_invariants(&game)?;
        }
    }

    #[test]
    fn apples_never_land_on_the_snake(seed in any::<u64>()) {
        let mut game = GameState::new(seed);
        for _ in 0..20 {
            let apple = game.apple().unwrap();
            prop_assert!(!game.snake().contains(apple));
            game.restart();
        }
    }
}
