//! Board rendering and click handling for the GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::Mark;
use crate::engine::GameEngine;

use super::theme::*;

/// Board view handles rendering and input for the game grid.
///
/// Marks are drawn inside cells (not on intersections); a click anywhere
/// in a cell selects it. The view never validates moves itself: it maps
/// the pointer position to raw cell coordinates and leaves every rule to
/// the engine.
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, engine: &GameEngine) -> Option<(i32, i32)> {
        let cols = engine.config().width();
        let rows = engine.config().height();

        // Square cells sized to fit the available space
        let available = ui.available_size();
        self.cell_size = ((available.x - 2.0 * BOARD_MARGIN) / cols as f32)
            .min((available.y - 2.0 * BOARD_MARGIN) / rows as f32)
            .max(8.0);

        let board_size = Vec2::new(
            self.cell_size * cols as f32,
            self.cell_size * rows as f32,
        );
        let (response, painter) = ui.allocate_painter(board_size, Sense::click());
        self.board_rect = response.rect;

        // Draw board background
        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        // Last move gets a tinted cell behind everything else
        if let Some(last) = engine.last_move() {
            painter.rect_filled(
                self.cell_rect(last.col, last.row),
                CornerRadius::ZERO,
                LAST_MOVE_BG,
            );
        }

        self.draw_grid(&painter, cols, rows);

        // Draw placed marks
        for row in 0..rows {
            for col in 0..cols {
                if let Some(mark) = engine.mark_at(col, row) {
                    self.draw_mark(&painter, col, row, mark, false);
                }
            }
        }

        // Winning run highlight
        if let Some(line) = engine.winning_line() {
            self.draw_winning_line(&painter, line);
        }

        // Hover preview and click
        let game_over = engine.outcome().is_terminal();
        let mut clicked = None;

        if let Some(pointer_pos) = response.hover_pos() {
            if let Some((col, row)) = self.screen_to_cell(pointer_pos, cols, rows) {
                let cell_free = engine.mark_at(col as usize, row as usize).is_none();
                if !game_over && cell_free {
                    self.draw_mark(
                        &painter,
                        col as usize,
                        row as usize,
                        engine.next_mark(),
                        true,
                    );
                }
                if response.clicked() {
                    clicked = Some((col, row));
                }
            }
        }

        clicked
    }

    /// Draw the interior grid lines
    fn draw_grid(&self, painter: &Painter, cols: usize, rows: usize) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);

        for col in 1..cols {
            let x = self.board_rect.min.x + col as f32 * self.cell_size;
            painter.line_segment(
                [
                    Pos2::new(x, self.board_rect.min.y),
                    Pos2::new(x, self.board_rect.max.y),
                ],
                stroke,
            );
        }

        for row in 1..rows {
            let y = self.board_rect.min.y + row as f32 * self.cell_size;
            painter.line_segment(
                [
                    Pos2::new(self.board_rect.min.x, y),
                    Pos2::new(self.board_rect.max.x, y),
                ],
                stroke,
            );
        }
    }

    /// Draw one mark inside its cell
    fn draw_mark(&self, painter: &Painter, col: usize, row: usize, mark: Mark, preview: bool) {
        let color = match mark {
            Mark::X => X_MARK,
            Mark::O => O_MARK,
        };
        let color = if preview { hover_preview(color) } else { color };
        let stroke = Stroke::new(self.cell_size * MARK_STROKE_WIDTH_RATIO, color);

        match mark {
            Mark::X => {
                let rect = self.cell_rect(col, row);
                let inset = self.cell_size * X_INSET_RATIO;
                let a = rect.min + Vec2::splat(inset);
                let b = rect.max - Vec2::splat(inset);
                painter.line_segment([a, b], stroke);
                painter.line_segment([Pos2::new(a.x, b.y), Pos2::new(b.x, a.y)], stroke);
            }
            Mark::O => {
                let center = self.cell_center(col, row);
                painter.circle_stroke(center, self.cell_size * O_RADIUS_RATIO, stroke);
            }
        }
    }

    /// Strike through the winning run from its first to its last cell
    fn draw_winning_line(&self, painter: &Painter, line: &[(usize, usize)]) {
        let (Some(&first), Some(&last)) = (line.first(), line.last()) else {
            return;
        };
        let stroke = Stroke::new(self.cell_size * 0.07, WIN_HIGHLIGHT);
        painter.line_segment(
            [
                self.cell_center(first.0, first.1),
                self.cell_center(last.0, last.1),
            ],
            stroke,
        );
    }

    /// Convert a screen position to cell coordinates
    fn screen_to_cell(&self, screen_pos: Pos2, cols: usize, rows: usize) -> Option<(i32, i32)> {
        if !self.board_rect.contains(screen_pos) {
            return None;
        }
        let relative = screen_pos - self.board_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        // Rect::contains is inclusive at max, so a pointer resting exactly
        // on the right or bottom edge floors to col == cols or row == rows
        if col >= 0 && col < cols as i32 && row >= 0 && row < rows as i32 {
            Some((col, row))
        } else {
            None
        }
    }

    fn cell_rect(&self, col: usize, row: usize) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(col as f32 * self.cell_size, row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    fn cell_center(&self, col: usize, row: usize) -> Pos2 {
        self.cell_rect(col, row).center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_3x3() -> BoardView {
        BoardView {
            cell_size: 100.0,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::new(300.0, 300.0)),
        }
    }

    #[test]
    fn test_screen_to_cell_interior() {
        let view = view_3x3();
        assert_eq!(view.screen_to_cell(Pos2::new(50.0, 50.0), 3, 3), Some((0, 0)));
        assert_eq!(view.screen_to_cell(Pos2::new(150.0, 250.0), 3, 3), Some((1, 2)));
        assert_eq!(view.screen_to_cell(Pos2::new(299.9, 299.9), 3, 3), Some((2, 2)));
    }

    #[test]
    fn test_screen_to_cell_outside_rect() {
        let view = view_3x3();
        assert_eq!(view.screen_to_cell(Pos2::new(-1.0, 50.0), 3, 3), None);
        assert_eq!(view.screen_to_cell(Pos2::new(50.0, 301.0), 3, 3), None);
    }

    #[test]
    fn test_screen_to_cell_on_max_edge() {
        // The rect contains its max corner, but flooring there lands one
        // past the last cell; the hover path must get None, not cell
        // coordinates that would index past the grid
        let view = view_3x3();
        assert_eq!(view.screen_to_cell(Pos2::new(300.0, 150.0), 3, 3), None);
        assert_eq!(view.screen_to_cell(Pos2::new(150.0, 300.0), 3, 3), None);
        assert_eq!(view.screen_to_cell(Pos2::new(300.0, 300.0), 3, 3), None);
    }
}
