//! Board structure: one bitboard per color

use super::bitboard::Bitboard;
use super::{Cell, Pos, Stone, TOTAL_CELLS};

/// 8x8 game board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    /// Standard opening: White on (3,3) and (4,4), Black on (3,4) and (4,3)
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.place_stone(Pos::new(3, 3), Stone::White);
        board.place_stone(Pos::new(3, 4), Stone::Black);
        board.place_stone(Pos::new(4, 3), Stone::Black);
        board.place_stone(Pos::new(4, 4), Stone::White);
        board
    }

    /// Board with no stones, for building arbitrary positions
    pub const fn empty() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get cell contents at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.black.get(pos) {
            Cell::Black
        } else if self.white.get(pos) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Put a stone on the board, replacing whatever was there.
    /// No legality check; game moves go through `Game::place`.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        self.stones_mut(stone.opponent()).clear(pos);
        self.stones_mut(stone).set(pos);
    }

    #[inline]
    pub fn stones(&self, stone: Stone) -> &Bitboard {
        match stone {
            Stone::Black => &self.black,
            Stone::White => &self.white,
        }
    }

    #[inline]
    pub fn stones_mut(&mut self, stone: Stone) -> &mut Bitboard {
        match stone {
            Stone::Black => &mut self.black,
            Stone::White => &mut self.white,
        }
    }

    /// Number of discs of one color
    #[inline]
    pub fn count(&self, stone: Stone) -> u32 {
        self.stones(stone).count()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Iterate empty positions in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&pos| self.is_empty(pos))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
