//! Two-player Othello (Reversi)
//!
//! A board model for standard 8x8 Othello plus a mouse-driven egui front end:
//! - Fixed opening: White on D4/E5, Black on E4/D5, Black moves first
//! - A placement must outflank at least one opponent run; every outflanked
//!   run flips
//! - A player with no legal move is skipped automatically
//! - The game ends when neither player can move; more discs wins
//!
//! # Architecture
//!
//! - [`board`]: Cells, positions and the bitboard-backed board
//! - [`rules`]: Capture scan, legality, end-of-game tally
//! - [`game`]: The model the front end drives (board + color to move)
//! - [`ui`]: eframe/egui presentation
//!
//! # Quick Start
//!
//! ```
//! use othello::{Cell, Game, Stone};
//!
//! let mut game = Game::new();
//! assert_eq!(game.current_mover(), Stone::Black);
//!
//! // Black outflanks the white disc at (3, 3)
//! assert_eq!(game.attempt_place(2, 3), Ok(true));
//! assert_eq!(game.cell(3, 3), Ok(Cell::Black));
//! assert_eq!(game.current_mover(), Stone::White);
//!
//! // Occupied cells are rejected without changing anything
//! assert_eq!(game.attempt_place(4, 4), Ok(false));
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, Stone, BOARD_SIZE};
pub use error::{BoardError, FontError};
pub use game::{Game, TurnChange};
pub use rules::Outcome;
