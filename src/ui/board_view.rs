//! Board rendering and pointer translation

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Pos, Ruleset, Stone, BOARD_SIZE, TOTAL_CELLS};

use super::theme::*;

/// What the board view draws besides the stones.
pub struct Overlay<'a> {
    pub turn: Stone,
    pub ruleset: Ruleset,
    pub last_move: Option<usize>,
    pub hint: Option<usize>,
    pub winning_line: Option<&'a [usize]>,
    /// Accept clicks (human to move, game running)
    pub interactive: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    cell_size: f32,
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// Only cells legal for the side to move are reported.
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &Overlay<'_>) -> Option<usize> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        if let Some(index) = overlay.last_move {
            painter.circle_filled(self.cell_to_screen(index), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }
        if let Some(line) = overlay.winning_line {
            self.draw_winning_line(&painter, line);
        }
        if let Some(index) = overlay.hint {
            self.draw_hint(&painter, index, overlay.turn);
        }

        if !overlay.interactive {
            return None;
        }
        let index = response.hover_pos().and_then(|pointer| self.screen_to_cell(pointer))?;
        let legal = board.can_place(index, overlay.turn, overlay.ruleset);

        let preview = if legal { stone_preview(overlay.turn) } else { Some(hover_invalid()) };
        if let Some(color) = preview {
            painter.circle_filled(self.cell_to_screen(index), self.stone_radius(), color);
        }

        (response.clicked() && legal).then_some(index)
    }

    #[inline]
    fn stone_radius(&self) -> f32 {
        self.cell_size * STONE_RADIUS_RATIO
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            painter.line_segment([start, start + Vec2::new(0.0, span)], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            painter.line_segment([start, start + Vec2::new(span, 0.0)], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            let center = self.cell_to_screen(Pos::new(row, col).to_index());
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw coordinate labels (A-S, 1-19)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..BOARD_SIZE {
            let letter = (b'A' + col as u8) as char;
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;
            let top = Pos2::new(x, self.board_rect.min.y + 12.0);
            painter.text(top, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);
        }

        for row in 0..BOARD_SIZE {
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;
            let left = Pos2::new(self.board_rect.min.x + 12.0, y);
            let label = (BOARD_SIZE - row).to_string();
            painter.text(left, egui::Align2::CENTER_CENTER, label, font.clone(), GRID_LINE);
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for index in board.occupied().iter_ones() {
            let center = self.cell_to_screen(index);
            let radius = self.stone_radius();
            let shadow = center + Vec2::new(2.0, 2.0);

            match board.get(index) {
                Stone::Black => {
                    painter.circle_filled(shadow, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                    painter.circle_filled(center, radius, BLACK_STONE);
                    let highlight = center + Vec2::new(-radius * 0.3, -radius * 0.3);
                    painter.circle_filled(highlight, radius * 0.2, BLACK_STONE_HIGHLIGHT);
                }
                Stone::White => {
                    painter.circle_filled(shadow, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                    painter.circle_filled(center, radius, WHITE_STONE);
                    painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
                }
                Stone::Empty => {}
            }
        }
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[usize]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);
        for pair in line.windows(2) {
            painter.line_segment([self.cell_to_screen(pair[0]), self.cell_to_screen(pair[1])], stroke);
        }
        for &index in line {
            painter.circle_stroke(self.cell_to_screen(index), self.stone_radius() + 3.0, stroke);
        }
    }

    fn draw_hint(&self, painter: &Painter, index: usize, turn: Stone) {
        let Some(color) = stone_preview(turn) else {
            return;
        };
        let center = self.cell_to_screen(index);
        painter.circle_filled(center, self.stone_radius(), color);
        let mark = if turn == Stone::Black { WHITE_STONE } else { BLACK_STONE };
        painter.text(center, egui::Align2::CENTER_CENTER, "?", egui::FontId::proportional(14.0), mark);
    }

    /// Cell under a screen position, `None` off the grid.
    pub fn screen_to_cell(&self, screen_pos: Pos2) -> Option<usize> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size + 0.5).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size + 0.5).floor() as i32;

        Pos::is_valid(row, col).then(|| row as usize * BOARD_SIZE + col as usize)
    }

    pub fn cell_to_screen(&self, index: usize) -> Pos2 {
        debug_assert!(index < TOTAL_CELLS);
        let pos = Pos::from_index(index);
        let x = self.board_rect.min.x + BOARD_MARGIN + f32::from(pos.col) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + f32::from(pos.row) * self.cell_size;
        Pos2::new(x, y)
    }
}
