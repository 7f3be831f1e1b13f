//! Game model: board plus the color to move
//!
//! `Game` is the whole state of a match. The presentation layer owns one
//! instance, mutates it through [`Game::attempt_place`] and reads it back
//! through the query methods. It knows nothing about rendering or input.

use tracing::{debug, instrument, trace};

use crate::board::{Board, Cell, Pos, Stone};
use crate::error::BoardError;
use crate::rules::{self, Outcome};

/// What happened to the turn after an accepted placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnChange {
    /// Opponent has a legal move and now moves
    Passed,
    /// Opponent has no legal move; the same color moves again
    Retained,
}

/// Board state and the color to move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_mover: Stone,
}

impl Game {
    /// Standard opening position, Black to move
    pub fn new() -> Self {
        Self::from_board(Board::new(), Stone::Black)
    }

    /// Continue from an arbitrary position
    pub fn from_board(board: Board, current_mover: Stone) -> Self {
        Self { board, current_mover }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell contents at (col, row)
    pub fn cell(&self, col: usize, row: usize) -> Result<Cell, BoardError> {
        let pos = Pos::try_new(col, row)?;
        Ok(self.board.get(pos))
    }

    /// Color allowed to place next
    pub fn current_mover(&self) -> Stone {
        self.current_mover
    }

    /// Try to place the mover's stone at (col, row).
    ///
    /// `Ok(false)` means the placement was illegal and nothing changed.
    /// Off-board coordinates are an error.
    #[instrument(level = "trace", skip(self))]
    pub fn attempt_place(&mut self, col: usize, row: usize) -> Result<bool, BoardError> {
        let pos = Pos::try_new(col, row)?;
        Ok(self.place(pos))
    }

    /// Same as [`Game::attempt_place`] for a position already on the board
    pub fn place(&mut self, pos: Pos) -> bool {
        self.play(pos).is_some()
    }

    /// Place and flip, then hand the turn over.
    ///
    /// Returns `None` for an illegal placement, otherwise how the turn moved.
    pub fn play(&mut self, pos: Pos) -> Option<TurnChange> {
        let mover = self.current_mover;
        let flipped = rules::execute_captures(&mut self.board, pos, mover);
        if flipped.is_empty() {
            trace!(?pos, ?mover, "placement rejected");
            return None;
        }

        debug!(?pos, ?mover, flipped = flipped.len(), "stone placed");
        Some(self.advance_turn())
    }

    fn advance_turn(&mut self) -> TurnChange {
        let opponent = self.current_mover.opponent();
        if rules::has_legal_move(&self.board, opponent) {
            self.current_mover = opponent;
            debug!(mover = ?opponent, "turn passed");
            TurnChange::Passed
        } else {
            debug!(
                mover = ?self.current_mover,
                "opponent has no legal move, turn retained"
            );
            TurnChange::Retained
        }
    }

    pub fn has_legal_move(&self, stone: Stone) -> bool {
        rules::has_legal_move(&self.board, stone)
    }

    /// Legal placements for the color to move
    pub fn legal_moves(&self) -> Vec<Pos> {
        rules::legal_moves(&self.board, self.current_mover)
    }

    pub fn is_legal(&self, pos: Pos) -> bool {
        rules::is_legal_move(&self.board, pos, self.current_mover)
    }

    /// Neither color can move
    pub fn is_terminal(&self) -> bool {
        rules::is_terminal(&self.board)
    }

    /// Disc-count comparison of the current board
    pub fn outcome(&self) -> Outcome {
        rules::compute_outcome(&self.board)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
