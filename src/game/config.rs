use std::time::Duration;

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use super::grid::Grid;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the board in pixels
    pub board_width: i32,
    /// Height of the board in pixels
    pub board_height: i32,
    /// Side of one square cell in pixels
    pub cell_size: i32,
    /// Milliseconds between two ticks
    pub tick_interval_ms: u64,
    /// Number of segments the snake starts with
    pub initial_snake_length: usize,
    /// Key under which the best score is persisted
    pub best_score_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 500,
            board_height: 500,
            cell_size: 50,
            tick_interval_ms: 170,
            initial_snake_length: 1,
            best_score_key: "bestScore".to_string(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board size
    pub fn new(board_width: i32, board_height: i32) -> Self {
        Self {
            board_width,
            board_height,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(250, 250)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.board_width, self.board_height, self.cell_size)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Rejects boards the simulation cannot run on.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell size must be positive, got {}", self.cell_size);
        ensure!(
            self.board_width > 0 && self.board_width % self.cell_size == 0,
            "board width {} is not a positive multiple of cell size {}",
            self.board_width,
            self.cell_size
        );
        ensure!(
            self.board_height > 0 && self.board_height % self.cell_size == 0,
            "board height {} is not a positive multiple of cell size {}",
            self.board_height,
            self.cell_size
        );
        ensure!(self.tick_interval_ms > 0, "tick interval must be positive");

        let cells = self.grid().cell_count();
        ensure!(cells >= 3, "board must hold at least 3 cells, got {}", cells);
        ensure!(
            self.initial_snake_length >= 1 && self.initial_snake_length + 2 <= cells,
            "initial snake length {} does not fit a board of {} cells",
            self.initial_snake_length,
            cells
        );
        // the starting body trails along one row behind a right-facing head
        let columns = self.grid().columns();
        ensure!(
            self.initial_snake_length <= columns as usize,
            "initial snake length {} overlaps itself on a board {} cells wide",
            self.initial_snake_length,
            columns
        );
        Ok(())
    }
}
