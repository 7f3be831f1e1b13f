//! Board representation for Othello

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

use crate::error::BoardError;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Stone colors. Also identifies the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }
}

/// Contents of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Occupant of the cell, if any
    #[inline]
    pub fn stone(self) -> Option<Stone> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Stone::Black),
            Cell::White => Some(Stone::White),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Stone> for Cell {
    fn from(stone: Stone) -> Self {
        match stone {
            Stone::Black => Cell::Black,
            Stone::White => Cell::White,
        }
    }
}

/// Position on the board, addressed as (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub col: u8,
    pub row: u8,
}

impl Pos {
    #[inline]
    pub fn new(col: u8, row: u8) -> Self {
        debug_assert!(col < BOARD_SIZE as u8 && row < BOARD_SIZE as u8);
        Self { col, row }
    }

    /// Bounds-checked constructor for coordinates coming from outside the model
    pub fn try_new(col: usize, row: usize) -> Result<Self, BoardError> {
        if col < BOARD_SIZE && row < BOARD_SIZE {
            Ok(Self::new(col as u8, row as u8))
        } else {
            Err(BoardError::InvalidCoordinate { col, row })
        }
    }

    /// Row-major index into a 64-cell board
    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            col: (idx % BOARD_SIZE) as u8,
            row: (idx / BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(col: i32, row: i32) -> bool {
        col >= 0 && col < BOARD_SIZE as i32 && row >= 0 && row < BOARD_SIZE as i32
    }

    /// Step one cell in direction (dc, dr); `None` once it leaves the board
    #[inline]
    pub fn offset(self, dc: i32, dr: i32) -> Option<Pos> {
        let col = self.col as i32 + dc;
        let row = self.row as i32 + dr;
        Pos::is_valid(col, row).then(|| Pos::new(col as u8, row as u8))
    }

    /// Iterate every position in row-major order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
