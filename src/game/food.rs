use rand::Rng;
use rand::seq::IteratorRandom;

use super::grid::Grid;
use super::state::{Position, Snake};

/// Random samples tried per board cell before falling back to a scan.
const SAMPLES_PER_CELL: usize = 4;

/// Picks a uniformly random cell the snake does not occupy.
///
/// Rejection sampling is bounded; past the bound the free cells are
/// enumerated and one is chosen directly. Returns `None` only when the snake
/// covers the whole board.
pub fn place_food<R: Rng + ?Sized>(rng: &mut R, snake: &Snake, grid: &Grid) -> Option<Position> {
    let attempts = grid.cell_count().saturating_mul(SAMPLES_PER_CELL).max(1);

    for _ in 0..attempts {
        let pos = grid.random_cell(rng);
        if !snake.occupies(pos) {
            return Some(pos);
        }
    }

    grid.cells().filter(|pos| !snake.occupies(*pos)).choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_food_never_on_snake() {
        let grid = Grid::new(250, 250, 50);
        let snake = Snake::from_segments(grid.cells().take(20).collect());
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let food = place_food(&mut rng, &snake, &grid).unwrap();
            assert!(!snake.occupies(food));
            assert_eq!(food.x % 50, 0);
            assert_eq!(food.y % 50, 0);
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let grid = Grid::new(150, 150, 50);
        let free = Position::new(100, 50);
        let snake = Snake::from_segments(grid.cells().filter(|p| *p != free).collect());
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(place_food(&mut rng, &snake, &grid), Some(free));
    }

    #[test]
    fn test_full_board_yields_none() {
        let grid = Grid::new(100, 100, 50);
        let snake = Snake::from_segments(grid.cells().collect());
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(place_food(&mut rng, &snake, &grid), None);
    }
}
