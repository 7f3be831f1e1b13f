//! GUI module for the Othello game
//!
//! This module provides a native Rust GUI using egui/eframe. It only reads
//! the [`Game`](crate::Game) through its queries and feeds clicks back into
//! [`Game::attempt_place`](crate::Game::attempt_place).

mod app;
mod board_view;
pub mod fonts;
pub mod theme;

pub use app::OthelloApp;
pub use board_view::{cell_at, BoardView};
