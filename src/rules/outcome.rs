//! End-of-game detection and result tally
//!
//! The game ends when neither color has a legal move, which can happen
//! before the board is full. The winner is whoever owns more discs.

use derive_more::Display;

use crate::board::{Board, Stone};

use super::capture::has_legal_move;

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Outcome {
    #[display("Black Wins!")]
    BlackWins,
    #[display("White Wins!")]
    WhiteWins,
    #[display("Draw!")]
    Draw,
}

impl Outcome {
    /// Winning color, `None` for a draw
    pub fn winner(self) -> Option<Stone> {
        match self {
            Outcome::BlackWins => Some(Stone::Black),
            Outcome::WhiteWins => Some(Stone::White),
            Outcome::Draw => None,
        }
    }
}

/// True when neither color can place a stone
pub fn is_terminal(board: &Board) -> bool {
    !has_legal_move(board, Stone::Black) && !has_legal_move(board, Stone::White)
}

/// Compare disc counts. Meaningful at any point, final once terminal.
pub fn compute_outcome(board: &Board) -> Outcome {
    let black = board.count(Stone::Black);
    let white = board.count(Stone::White);

    match black.cmp(&white) {
        std::cmp::Ordering::Greater => Outcome::BlackWins,
        std::cmp::Ordering::Less => Outcome::WhiteWins,
        std::cmp::Ordering::Equal => Outcome::Draw,
    }
}
