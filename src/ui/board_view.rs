//! Board rendering for the Othello GUI

use egui::{Align2, Color32, CornerRadius, FontFamily, FontId, Painter, Pos2, Rect, Sense, Vec2};

use crate::{Cell, Game, Pos, Stone, BOARD_SIZE};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cell size in pixels
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked (col, row), if any.
    ///
    /// The coordinates are not bounds-checked here; the model rejects
    /// anything off the board.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        game: &Game,
        result_font: Option<&FontFamily>,
    ) -> Option<(usize, usize)> {
        let side = self.cell_size * BOARD_SIZE as f32;
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::ZERO, BOARD_BG);
        self.draw_cells(&painter);
        self.draw_stones(&painter, game);

        let terminal = game.is_terminal();

        if !terminal {
            if let Some(pos) = response.hover_pos().and_then(|p| self.hovered_cell(p)) {
                if game.is_legal(pos) {
                    self.draw_hover_preview(&painter, pos, game.current_mover());
                }
            }
        }

        if terminal {
            if let Some(family) = result_font {
                self.draw_result(&painter, &game.outcome().to_string(), family);
            }
        }

        if response.clicked() {
            response
                .interact_pointer_pos()
                .and_then(|p| cell_at(p - self.board_rect.min, self.cell_size))
        } else {
            None
        }
    }

    /// Draw one square per cell, leaving a thin grid gap
    fn draw_cells(&self, painter: &Painter) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let min = self.cell_origin(col, row) + Vec2::splat(CELL_INSET);
                let rect = Rect::from_min_size(min, Vec2::splat(self.cell_size - 2.0 * CELL_INSET));
                painter.rect_filled(rect, CornerRadius::ZERO, CELL_FILL);
            }
        }
    }

    /// Draw all placed stones
    fn draw_stones(&self, painter: &Painter, game: &Game) {
        for pos in Pos::all() {
            let color = match game.board().get(pos) {
                Cell::Black => BLACK_STONE,
                Cell::White => WHITE_STONE,
                Cell::Empty => continue,
            };
            painter.circle_filled(self.cell_center(pos), self.stone_radius(), color);
        }
    }

    /// Translucent stone on a legal cell under the pointer
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone) {
        let color: Color32 = match turn {
            Stone::Black => hover_black(),
            Stone::White => hover_white(),
        };
        painter.circle_filled(self.cell_center(pos), self.stone_radius(), color);
    }

    fn draw_result(&self, painter: &Painter, text: &str, family: &FontFamily) {
        let anchor = self.board_rect.min + Vec2::from(RESULT_TEXT_OFFSET);
        painter.text(
            anchor,
            Align2::LEFT_TOP,
            text,
            FontId::new(RESULT_TEXT_SIZE, family.clone()),
            RESULT_TEXT,
        );
    }

    fn hovered_cell(&self, screen_pos: Pos2) -> Option<Pos> {
        let (col, row) = cell_at(screen_pos - self.board_rect.min, self.cell_size)?;
        Pos::try_new(col, row).ok()
    }

    fn stone_radius(&self) -> f32 {
        self.cell_size / 2.0 - STONE_INSET
    }

    fn cell_origin(&self, col: usize, row: usize) -> Pos2 {
        self.board_rect.min + Vec2::new(col as f32, row as f32) * self.cell_size
    }

    fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_origin(pos.col as usize, pos.row as usize) + Vec2::splat(self.cell_size / 2.0)
    }
}

/// Integer-divide a board-relative pixel offset by the cell size.
///
/// `None` only for offsets left of or above the board.
pub fn cell_at(offset: Vec2, cell_size: f32) -> Option<(usize, usize)> {
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let col = (offset.x / cell_size).floor() as usize;
    let row = (offset.y / cell_size).floor() as usize;
    Some((col, row))
}
