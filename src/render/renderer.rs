use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color as TermColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::canvas::{Cell, CellCanvas, TuiSurface};
use super::surface::{Color, Overlay};

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, surface: &TuiSurface) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(surface);
        frame.render_widget(stats, chunks[0]);

        let board_area = self.board_area(chunks[1], &surface.canvas);
        frame.render_widget(self.render_grid(&surface.canvas), board_area);

        if surface.status.overlay != Overlay::Hidden {
            let popup = centered(board_area, 30, 7);
            frame.render_widget(Clear, popup);
            frame.render_widget(self.render_overlay(surface), popup);
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    /// Board rectangle sized to the canvas (two columns per cell plus
    /// borders), centred in `area` and clipped to it.
    fn board_area(&self, area: Rect, canvas: &CellCanvas) -> Rect {
        let width = (canvas.columns() as u16).saturating_mul(2).saturating_add(2);
        let height = (canvas.rows() as u16).saturating_add(2);
        centered(area, width, height)
    }

    fn render_grid(&self, canvas: &CellCanvas) -> Paragraph<'static> {
        let mut lines = Vec::with_capacity(canvas.rows());

        for row in 0..canvas.rows() {
            let spans: Vec<Span> = (0..canvas.columns())
                .map(|column| cell_span(canvas.cell(column, row)))
                .collect();
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(TermColor::White))
                .title(" Snake "),
        )
    }

    fn render_stats<'a>(&self, surface: &'a TuiSurface) -> Paragraph<'a> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(TermColor::Yellow)),
            Span::styled(
                surface.status.score_text.as_str(),
                Style::default()
                    .fg(TermColor::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(TermColor::Yellow)),
            Span::styled(
                surface.status.best_score_text.as_str(),
                Style::default().fg(TermColor::White),
            ),
        ])];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM))
    }

    fn render_overlay<'a>(&self, surface: &'a TuiSurface) -> Paragraph<'a> {
        let (title, color) = match surface.status.overlay {
            Overlay::Victory => ("VICTORY", TermColor::Green),
            _ => ("GAME OVER", TermColor::Red),
        };

        let text = vec![
            Line::from(vec![Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )]),
            Line::from(vec![
                Span::styled("Score: ", Style::default().fg(TermColor::Yellow)),
                Span::styled(
                    surface.status.score_text.as_str(),
                    Style::default()
                        .fg(TermColor::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(TermColor::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(TermColor::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(TermColor::Gray)),
                Span::styled(
                    "Q",
                    Style::default()
                        .fg(TermColor::Red)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(TermColor::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(TermColor::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(TermColor::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(TermColor::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(TermColor::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Red => TermColor::Red,
        Color::Green => TermColor::Green,
        Color::Black => TermColor::Black,
    }
}

fn cell_span(cell: Cell) -> Span<'static> {
    match (cell.fill, cell.outline) {
        (Some(fill), Some(outline)) => Span::styled(
            "[]",
            Style::default().fg(term_color(outline)).bg(term_color(fill)),
        ),
        (Some(fill), None) => Span::styled("  ", Style::default().bg(term_color(fill))),
        (None, Some(outline)) => Span::styled("[]", Style::default().fg(term_color(outline))),
        (None, None) => Span::styled(". ", Style::default().fg(TermColor::DarkGray)),
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Grid, Position};
    use crate::render::surface::{RenderSurface, StatusSurface};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_centered_fits_inside_area() {
        let area = Rect::new(0, 0, 40, 20);
        let rect = centered(area, 10, 4);
        assert_eq!((rect.width, rect.height), (10, 4));
        assert_eq!((rect.x, rect.y), (15, 8));

        let clipped = centered(area, 100, 100);
        assert_eq!((clipped.width, clipped.height), (40, 20));
    }

    #[test]
    fn test_render_board_and_overlay() {
        let mut surface = TuiSurface::new(Grid::new(250, 250, 50));
        surface.draw_filled_rect(Position::new(0, 0), 50, Color::Green);
        surface.draw_rect_outline(Position::new(0, 0), 50, Color::Black);
        surface.set_score_text(4);
        surface.set_best_score_text(9);

        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        let renderer = Renderer::new();
        terminal.draw(|frame| renderer.render(frame, &surface)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Score: 4"));
        assert!(text.contains("Best: 9"));
        assert!(text.contains("[]"));
        assert!(!text.contains("GAME OVER"));

        surface.show_game_over();
        terminal.draw(|frame| renderer.render(frame, &surface)).unwrap();
        assert!(screen_text(&terminal).contains("GAME OVER"));
    }
}
