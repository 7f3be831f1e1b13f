//! Game rules for Othello
//!
//! This module implements the rule set:
//! - Capture rules (8-direction outflanking and flipping)
//! - Move legality
//! - End-of-game detection and disc tally

pub mod capture;
pub mod outcome;

// Re-exports for convenient access
pub use capture::{
    captured_positions, execute_captures, has_capture, has_legal_move, is_legal_move,
    legal_moves, DIRECTIONS,
};
pub use outcome::{compute_outcome, is_terminal, Outcome};
