//! Drawing and status capabilities the game paints into. Coordinates and
//! sizes are in board pixels.

use crate::game::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Black,
}

pub const FOOD_COLOR: Color = Color::Red;
pub const SNAKE_COLOR: Color = Color::Green;
pub const SNAKE_BORDER_COLOR: Color = Color::Black;

pub trait RenderSurface {
    fn clear(&mut self);
    fn draw_filled_rect(&mut self, pos: Position, size: i32, fill: Color);
    fn draw_rect_outline(&mut self, pos: Position, size: i32, stroke: Color);
}

/// End-of-game banner currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Hidden,
    GameOver,
    Victory,
}

pub trait StatusSurface {
    fn show_game_over(&mut self);
    fn show_victory(&mut self);
    fn hide_overlays(&mut self);
    fn set_score_text(&mut self, score: u32);
    fn set_best_score_text(&mut self, best: u32);
}
