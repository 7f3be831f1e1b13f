//! Main application for the Othello GUI

use std::path::Path;

use eframe::egui;
use egui::{CentralPanel, Context, FontFamily, Frame};
use tracing::debug;

use super::board_view::BoardView;
use super::fonts;
use super::theme::*;
use crate::Game;

/// Main Othello application. Owns the one game of this process.
pub struct OthelloApp {
    game: Game,
    board_view: BoardView,
    /// `None` when the result font failed to load
    result_font: Option<FontFamily>,
}

impl OthelloApp {
    /// Create the app around an already-constructed game
    pub fn new(cc: &eframe::CreationContext<'_>, game: Game) -> Self {
        let result_font =
            fonts::install_font(&cc.egui_ctx, Path::new(RESULT_FONT_PATH), RESULT_FONT_NAME);

        Self {
            game,
            board_view: BoardView::default(),
            result_font,
        }
    }

    /// Render the board and route clicks into the game
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_BG))
            .show(ctx, |ui| {
                let clicked = self
                    .board_view
                    .show(ui, &self.game, self.result_font.as_ref());

                if let Some((col, row)) = clicked {
                    self.handle_click(col, row);
                }
            });
    }

    /// Illegal placements are silently ignored
    fn handle_click(&mut self, col: usize, row: usize) {
        match self.game.attempt_place(col, row) {
            Ok(true) => {
                if self.game.is_terminal() {
                    debug!(outcome = %self.game.outcome(), "game over");
                }
            }
            Ok(false) => {}
            Err(err) => debug!(error = %err, "click outside the board"),
        }
    }
}

impl eframe::App for OthelloApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.render_board(ctx);
    }
}
