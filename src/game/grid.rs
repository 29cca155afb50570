//! Board geometry: pixel dimensions split into square cells, with edges that
//! wrap around to the opposite side.

use rand::Rng;

use super::state::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Number of cells on the board, the longest a snake can ever get.
    pub fn cell_count(&self) -> usize {
        ((self.width as i64 * self.height as i64) / (self.cell_size as i64).pow(2)) as usize
    }

    /// Folds a position back onto the board. The result always lies in
    /// `[0, width) x [0, height)`, whatever the sign of the input.
    pub fn wrap(&self, pos: Position) -> Position {
        Position::new(pos.x.rem_euclid(self.width), pos.y.rem_euclid(self.height))
    }

    /// Top-left corner of the cell at (column, row)
    pub fn cell(&self, column: i32, row: i32) -> Position {
        Position::new(column * self.cell_size, row * self.cell_size)
    }

    /// Column and row of a cell-aligned position
    pub fn cell_index(&self, pos: Position) -> (i32, i32) {
        (pos.x / self.cell_size, pos.y / self.cell_size)
    }

    /// Uniformly random cell-aligned position
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        let column = rng.gen_range(0..self.columns());
        let row = rng.gen_range(0..self.rows());
        self.cell(column, row)
    }

    /// Every cell on the board, row by row
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.columns()).map(move |col| self.cell(col, row)))
    }
}
