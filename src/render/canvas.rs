use crate::game::{Grid, Position};

use super::surface::{Color, Overlay, RenderSurface, StatusSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub fill: Option<Color>,
    pub outline: Option<Color>,
}

/// Render surface backed by one [`Cell`] per board cell. Rectangles are
/// rasterised onto every cell they overlap and clipped to the board.
#[derive(Debug, Clone)]
pub struct CellCanvas {
    grid: Grid,
    cells: Vec<Cell>,
}

impl CellCanvas {
    pub fn new(grid: Grid) -> Self {
        let len = grid.cell_count();
        Self {
            grid,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn columns(&self) -> usize {
        self.grid.columns() as usize
    }

    pub fn rows(&self) -> usize {
        self.grid.rows() as usize
    }

    pub fn cell(&self, column: usize, row: usize) -> Cell {
        self.cells[row * self.columns() + column]
    }

    pub fn cell_at(&self, pos: Position) -> Cell {
        let (column, row) = self.grid.cell_index(pos);
        self.cell(column as usize, row as usize)
    }

    fn paint(&mut self, pos: Position, size: i32, apply: impl Fn(&mut Cell)) {
        // nothing left of or above the board reaches a cell
        if size <= 0 || pos.x + size <= 0 || pos.y + size <= 0 {
            return;
        }
        let cs = self.grid.cell_size;
        let first_col = pos.x.max(0) / cs;
        let first_row = pos.y.max(0) / cs;
        let last_col = ((pos.x + size - 1) / cs).min(self.grid.columns() - 1);
        let last_row = ((pos.y + size - 1) / cs).min(self.grid.rows() - 1);

        let columns = self.columns();
        for row in first_row..=last_row {
            for col in first_col..=last_col {
                apply(&mut self.cells[row as usize * columns + col as usize]);
            }
        }
    }
}

impl RenderSurface for CellCanvas {
    fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    fn draw_filled_rect(&mut self, pos: Position, size: i32, fill: Color) {
        self.paint(pos, size, |cell| cell.fill = Some(fill));
    }

    fn draw_rect_outline(&mut self, pos: Position, size: i32, stroke: Color) {
        self.paint(pos, size, |cell| cell.outline = Some(stroke));
    }
}

/// Text and banner state for the header and overlays
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusPanel {
    pub overlay: Overlay,
    pub score_text: String,
    pub best_score_text: String,
}

impl StatusSurface for StatusPanel {
    fn show_game_over(&mut self) {
        self.overlay = Overlay::GameOver;
    }

    fn show_victory(&mut self) {
        self.overlay = Overlay::Victory;
    }

    fn hide_overlays(&mut self) {
        self.overlay = Overlay::Hidden;
    }

    fn set_score_text(&mut self, score: u32) {
        self.score_text = score.to_string();
    }

    fn set_best_score_text(&mut self, best: u32) {
        self.best_score_text = best.to_string();
    }
}

/// Everything the terminal frontend presents
#[derive(Debug, Clone)]
pub struct TuiSurface {
    pub canvas: CellCanvas,
    pub status: StatusPanel,
}

impl TuiSurface {
    pub fn new(grid: Grid) -> Self {
        Self {
            canvas: CellCanvas::new(grid),
            status: StatusPanel::default(),
        }
    }
}

impl RenderSurface for TuiSurface {
    fn clear(&mut self) {
        self.canvas.clear();
    }

    fn draw_filled_rect(&mut self, pos: Position, size: i32, fill: Color) {
        self.canvas.draw_filled_rect(pos, size, fill);
    }

    fn draw_rect_outline(&mut self, pos: Position, size: i32, stroke: Color) {
        self.canvas.draw_rect_outline(pos, size, stroke);
    }
}

impl StatusSurface for TuiSurface {
    fn show_game_over(&mut self) {
        self.status.show_game_over();
    }

    fn show_victory(&mut self) {
        self.status.show_victory();
    }

    fn hide_overlays(&mut self) {
        self.status.hide_overlays();
    }

    fn set_score_text(&mut self, score: u32) {
        self.status.set_score_text(score);
    }

    fn set_best_score_text(&mut self, best: u32) {
        self.status.set_best_score_text(best);
    }
}
