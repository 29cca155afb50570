use super::action::Direction;
use super::grid::Grid;
use crate::input::InputQueue;

/// A cell-aligned position on the board, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell in a direction, without wrapping
    pub fn moved_in_direction(&self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.delta(cell_size);
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
}

impl Snake {
    /// Create a snake whose extra segments trail behind the head, opposite to
    /// `direction`, wrapping across edges.
    pub fn new(head: Position, direction: Direction, length: usize, grid: &Grid) -> Self {
        let mut body = vec![grid.wrap(head)];
        let back = direction.opposite();

        for i in 1..length.max(1) {
            let prev = body[i - 1];
            body.push(grid.wrap(prev.moved_in_direction(back, grid.cell_size)));
        }

        Self { body }
    }

    /// Snake with exactly these segments, head first.
    ///
    /// Panics if `body` is empty.
    pub fn from_segments(body: Vec<Position>) -> Self {
        assert!(!body.is_empty(), "a snake has at least one segment");
        Self { body }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    /// No game started yet
    #[default]
    Idle,
    Running,
    /// The snake ran into itself
    GameOver,
    /// The board filled up
    Victory,
}

/// Transient per-game state, rebuilt on every restart
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub direction: Direction,
    pub input: InputQueue,
    pub status: GameStatus,
    pub steps: u32,
}

impl GameState {
    /// Create a new game state. The input queue starts out treating
    /// `direction` as the most recently accepted key.
    pub fn new(snake: Snake, food: Position, direction: Direction) -> Self {
        Self {
            snake,
            food,
            direction,
            input: InputQueue::new(direction),
            status: GameStatus::Idle,
            steps: 0,
        }
    }
}
