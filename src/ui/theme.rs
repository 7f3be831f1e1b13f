//! Theme constants for the Othello GUI

use egui::Color32;

use crate::BOARD_SIZE;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(0, 128, 0); // Grid line green
pub const CELL_FILL: Color32 = Color32::from_rgb(0, 100, 0);

// Stone colors
pub const BLACK_STONE: Color32 = Color32::BLACK;
pub const WHITE_STONE: Color32 = Color32::WHITE;

// End-of-game text
pub const RESULT_TEXT: Color32 = Color32::YELLOW;

// Functions for colors that can't be const
pub fn hover_black() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 0, 80)
}

pub fn hover_white() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 80)
}

// Sizes
pub const CELL_SIZE: f32 = 80.0;
pub const WINDOW_SIZE: f32 = CELL_SIZE * BOARD_SIZE as f32; // 640
/// Gap between a cell square and its neighbours, per side
pub const CELL_INSET: f32 = 1.0;
/// Gap between a stone and the cell edge
pub const STONE_INSET: f32 = 5.0;
pub const RESULT_TEXT_SIZE: f32 = 48.0;
/// Top-left of the result text, relative to the board
pub const RESULT_TEXT_OFFSET: [f32; 2] = [50.0, WINDOW_SIZE / 2.0 - RESULT_TEXT_SIZE / 2.0];

// Assets
pub const RESULT_FONT_PATH: &str = "ARIALN.TTF";
pub const RESULT_FONT_NAME: &str = "result";
