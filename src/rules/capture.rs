//! Capture rules for Othello (outflanking)
//!
//! A placement captures along a direction when the cells next to it form a
//! contiguous run of opponent stones that ends on one of the mover's own
//! stones. A run that reaches an empty cell or the board edge captures nothing.

use crate::board::{Board, Cell, Pos, Stone};

/// Direction vectors (dc, dr) for all 8 compass directions
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),  // W
    (-1, -1), // NW
    (0, -1),  // N
    (1, -1),  // NE
    (1, 0),   // E
    (1, 1),   // SE
    (0, 1),   // S
    (-1, 1),  // SW
];

/// Walk from `pos` along (dc, dr) and return the opponent run it would flip.
///
/// Returns an empty vector when the direction does not capture.
fn captured_in_direction(board: &Board, pos: Pos, stone: Stone, dc: i32, dr: i32) -> Vec<Pos> {
    let opponent = Cell::from(stone.opponent());
    let mut run = Vec::new();
    let mut cursor = pos.offset(dc, dr);

    while let Some(p) = cursor {
        if board.get(p) != opponent {
            break;
        }
        run.push(p);
        cursor = p.offset(dc, dr);
    }

    match cursor {
        Some(end) if !run.is_empty() && board.get(end) == Cell::from(stone) => run,
        _ => Vec::new(),
    }
}

/// Find positions that would be flipped if `stone` is placed at `pos`.
///
/// Does not check that `pos` itself is empty; see [`is_legal_move`].
///
/// # Arguments
/// * `board` - Current board state
/// * `pos` - Position where stone will be placed
/// * `stone` - Color of the stone being placed
///
/// # Returns
/// Every opponent stone flipped across all capturing directions
pub fn captured_positions(board: &Board, pos: Pos, stone: Stone) -> Vec<Pos> {
    DIRECTIONS
        .iter()
        .flat_map(|&(dc, dr)| captured_in_direction(board, pos, stone, dc, dr))
        .collect()
}

/// Check if placing at `pos` captures in at least one direction.
///
/// Stops at the first capturing direction without allocating the full list.
#[inline]
pub fn has_capture(board: &Board, pos: Pos, stone: Stone) -> bool {
    let opponent = Cell::from(stone.opponent());
    let own = Cell::from(stone);

    DIRECTIONS.iter().any(|&(dc, dr)| {
        let mut cursor = pos.offset(dc, dr);
        let mut seen_opponent = false;
        while let Some(p) = cursor {
            let cell = board.get(p);
            if cell == opponent {
                seen_opponent = true;
                cursor = p.offset(dc, dr);
            } else {
                return seen_opponent && cell == own;
            }
        }
        false
    })
}

/// A legal move is an empty cell with at least one capturing direction
#[inline]
pub fn is_legal_move(board: &Board, pos: Pos, stone: Stone) -> bool {
    board.is_empty(pos) && has_capture(board, pos, stone)
}

/// Check whether `stone` has any legal placement on the board
pub fn has_legal_move(board: &Board, stone: Stone) -> bool {
    board.empty_cells().any(|pos| has_capture(board, pos, stone))
}

/// All legal placements for `stone`, in row-major order
pub fn legal_moves(board: &Board, stone: Stone) -> Vec<Pos> {
    board
        .empty_cells()
        .filter(|&pos| has_capture(board, pos, stone))
        .collect()
}

/// Place `stone` at `pos` and flip every captured run.
///
/// Returns the flipped positions. Nothing changes when the move is illegal,
/// in which case the returned vector is empty.
pub fn execute_captures(board: &mut Board, pos: Pos, stone: Stone) -> Vec<Pos> {
    if !board.is_empty(pos) {
        return Vec::new();
    }

    let captured = captured_positions(board, pos, stone);
    if captured.is_empty() {
        return captured;
    }

    board.place_stone(pos, stone);
    for &cap_pos in &captured {
        board.place_stone(cap_pos, stone);
    }

    captured
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_capture_west_on_row() {
        let board = Board::new();
        // Black at (2,3): W at (3,3) then B at (4,3)
        let captured = captured_positions(&board, Pos::new(2, 3), Stone::Black);
        assert_eq!(captured, vec![Pos::new(3, 3)]);
    }

    #[test]
    fn test_opening_legal_moves() {
        let board = Board::new();
        let black = legal_moves(&board, Stone::Black);
        assert_eq!(
            black,
            vec![Pos::new(3, 2), Pos::new(2, 3), Pos::new(5, 4), Pos::new(4, 5)]
        );
        let white = legal_moves(&board, Stone::White);
        assert_eq!(
            white,
            vec![Pos::new(4, 2), Pos::new(5, 3), Pos::new(2, 4), Pos::new(3, 5)]
        );
    }

    #[test]
    fn test_run_ending_at_edge_captures_nothing() {
        let mut board = Board::empty();
        // B _ W W W | edge
        board.place_stone(Pos::new(5, 0), Stone::White);
        board.place_stone(Pos::new(6, 0), Stone::White);
        board.place_stone(Pos::new(7, 0), Stone::White);

        assert!(captured_positions(&board, Pos::new(4, 0), Stone::Black).is_empty());
        assert!(!has_capture(&board, Pos::new(4, 0), Stone::Black));
    }

    #[test]
    fn test_run_ending_at_empty_captures_nothing() {
        let mut board = Board::empty();
        board.place_stone(Pos::new(1, 1), Stone::White);
        board.place_stone(Pos::new(2, 2), Stone::White);
        // (3,3) empty

        assert!(!has_capture(&board, Pos::new(0, 0), Stone::Black));
    }

    #[test]
    fn test_adjacent_own_stone_captures_nothing() {
        let mut board = Board::empty();
        board.place_stone(Pos::new(1, 0), Stone::Black);
        assert!(!has_capture(&board, Pos::new(0, 0), Stone::Black));
    }

    #[test]
    fn test_capture_long_diagonal() {
        let mut board = Board::empty();
        for i in 1..7 {
            board.place_stone(Pos::new(i, i), Stone::White);
        }
        board.place_stone(Pos::new(7, 7), Stone::Black);

        let captured = captured_positions(&board, Pos::new(0, 0), Stone::Black);
        assert_eq!(captured.len(), 6);
        assert!(has_capture(&board, Pos::new(0, 0), Stone::Black));
    }

    #[test]
    fn test_capture_multiple_directions() {
        let mut board = Board::empty();
        // Center (3,3) surrounded by white, each backed by black
        for &(dc, dr) in &DIRECTIONS {
            let w = Pos::new((3 + dc) as u8, (3 + dr) as u8);
            let b = Pos::new((3 + 2 * dc) as u8, (3 + 2 * dr) as u8);
            board.place_stone(w, Stone::White);
            board.place_stone(b, Stone::Black);
        }

        let captured = captured_positions(&board, Pos::new(3, 3), Stone::Black);
        assert_eq!(captured.len(), 8);
    }

    #[test]
    fn test_execute_captures_flips() {
        let mut board = Board::new();
        let flipped = execute_captures(&mut board, Pos::new(2, 3), Stone::Black);
        assert_eq!(flipped, vec![Pos::new(3, 3)]);
        assert_eq!(board.get(Pos::new(2, 3)), Cell::Black);
        assert_eq!(board.get(Pos::new(3, 3)), Cell::Black);
        assert_eq!(board.count(Stone::Black), 4);
        assert_eq!(board.count(Stone::White), 1);
    }

    #[test]
    fn test_execute_captures_illegal_is_noop() {
        let mut board = Board::new();
        let before = board;

        assert!(execute_captures(&mut board, Pos::new(0, 0), Stone::Black).is_empty());
        assert!(execute_captures(&mut board, Pos::new(3, 3), Stone::Black).is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn test_is_legal_move_requires_empty() {
        let board = Board::new();
        assert!(is_legal_move(&board, Pos::new(2, 3), Stone::Black));
        assert!(!is_legal_move(&board, Pos::new(3, 3), Stone::Black));
        assert!(!is_legal_move(&board, Pos::new(2, 3), Stone::White));
    }

    #[test]
    fn test_no_legal_move_on_full_board() {
        let mut board = Board::empty();
        for pos in Pos::all() {
            let stone = if pos.to_index() % 2 == 0 { Stone::Black } else { Stone::White };
            board.place_stone(pos, stone);
        }
        assert!(!has_legal_move(&board, Stone::Black));
        assert!(!has_legal_move(&board, Stone::White));
    }
}
