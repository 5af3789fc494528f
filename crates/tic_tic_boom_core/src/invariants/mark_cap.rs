//! Mark cap invariant: no symbol keeps more than three marks.

use super::super::{GameBoard, Symbol, MAX_ACTIVE_MARKS};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: each symbol holds at most [`MAX_ACTIVE_MARKS`] cells.
pub struct MarkCapInvariant;

impl Invariant<GameBoard> for MarkCapInvariant {
    fn holds(board: &GameBoard) -> bool {
        Symbol::iter().all(|symbol| board.marks_on_board(symbol) <= MAX_ACTIVE_MARKS)
    }

    fn description() -> &'static str {
        "No symbol holds more than three cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{replay, Cell, Move};

    #[test]
    fn test_long_game_holds() {
        // Both symbols cycle through the bottom two rows without completing one.
        let moves = [
            Move::new(Symbol::O, 1, 0),
            Move::new(Symbol::X, 2, 0),
            Move::new(Symbol::O, 1, 1),
            Move::new(Symbol::X, 2, 1),
            Move::new(Symbol::O, 0, 2),
            Move::new(Symbol::X, 1, 2),
            Move::new(Symbol::O, 0, 0),
            Move::new(Symbol::X, 0, 1),
        ];
        let (board, results) = replay(&moves);
        assert!(results.iter().all(|r| r.is_accepted()));
        assert!(MarkCapInvariant::holds(&board));
        assert_eq!(board.marks_on_board(Symbol::O), 3);
        assert_eq!(board.marks_on_board(Symbol::X), 3);
    }

    #[test]
    fn test_fourth_mark_violates() {
        let mut board = GameBoard::new();
        for col in 0..3 {
            board.grid[0][col] = Cell::Occupied(Symbol::O);
        }
        assert!(MarkCapInvariant::holds(&board));
        board.grid[2][2] = Cell::Occupied(Symbol::O);
        assert!(!MarkCapInvariant::holds(&board));
    }
}
