use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{
    action::Direction,
    config::GameConfig,
    food::place_food,
    grid::Grid,
    state::{GameState, Position, Snake},
};

/// Moves the snake one cell in `direction`, wrapping across edges.
///
/// The new head is pushed to the front. When it lands on `food` the tail is
/// kept and the snake grows by one; otherwise the tail is dropped. Returns
/// whether food was eaten.
pub fn advance(snake: &mut Snake, direction: Direction, food: Position, grid: &Grid) -> bool {
    let new_head = grid.wrap(snake.head().moved_in_direction(direction, grid.cell_size));
    snake.body.insert(0, new_head);

    let ate = new_head == food;
    if !ate {
        snake.body.pop();
    }
    ate
}

/// True iff the head sits on one of the other segments.
pub fn check_collision(snake: &Snake) -> bool {
    snake.collides_with_body(snake.head())
}

/// True once the snake covers every cell but one.
pub fn check_victory(snake: &Snake, grid: &Grid) -> bool {
    snake.len() == grid.cell_count().saturating_sub(1)
}

/// Information about a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Whether a queued key was consumed this step
    pub turned: bool,
    /// False when food could not be respawned because the board is full
    pub food_placed: bool,
}

/// Owns the randomness of a game and applies the movement rules
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Engine with reproducible food placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let grid = config.grid();
        Self { config, grid, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Fresh state: snake at the origin heading right, food on a free cell.
    pub fn reset(&mut self) -> GameState {
        let direction = Direction::Right;
        let snake = Snake::new(
            Position::new(0, 0),
            direction,
            self.config.initial_snake_length,
            &self.grid,
        );
        // validated configs always leave free cells
        let food = place_food(&mut self.rng, &snake, &self.grid).unwrap_or(Position::new(0, 0));

        GameState::new(snake, food, direction)
    }

    /// Consume at most one queued key, move, and respawn food when eaten.
    ///
    /// Collision and victory are left to the caller.
    pub fn step(&mut self, state: &mut GameState) -> StepInfo {
        let turned = match state.input.dequeue() {
            Some(direction) => {
                state.direction = direction;
                true
            }
            None => false,
        };

        let ate_food = advance(&mut state.snake, state.direction, state.food, &self.grid);
        state.steps += 1;

        let mut food_placed = true;
        if ate_food {
            match place_food(&mut self.rng, &state.snake, &self.grid) {
                Some(food) => state.food = food,
                None => food_placed = false,
            }
        }

        StepInfo {
            ate_food,
            turned,
            food_placed,
        }
    }
}
