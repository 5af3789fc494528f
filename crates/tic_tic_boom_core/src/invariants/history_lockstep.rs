//! History lockstep invariant: each history names exactly its symbol's cells.

use super::super::{GameBoard, Symbol};
use super::Invariant;
use std::collections::HashSet;
use strum::IntoEnumIterator;

/// Invariant: a symbol's history and its cells on the grid are the same set.
///
/// Every history entry points at a cell holding that symbol, no entry
/// repeats, and no cell holds the symbol without an entry.
pub struct HistoryLockstepInvariant;

impl Invariant<GameBoard> for HistoryLockstepInvariant {
    fn holds(board: &GameBoard) -> bool {
        Symbol::iter().all(|symbol| {
            let history = board.history(symbol);
            let unique: HashSet<_> = history.iter().collect();
            unique.len() == history.len()
                && history.len() == board.marks_on_board(symbol)
                && history
                    .iter()
                    .all(|coord| board.cell(coord).symbol() == Some(symbol))
        })
    }

    fn description() -> &'static str {
        "Move history matches the marks on the grid"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{replay, Cell, Coord, Move};

    #[test]
    fn test_replayed_game_holds() {
        let (board, _) = replay(&[
            Move::new(Symbol::X, 0, 0),
            Move::new(Symbol::O, 1, 1),
            Move::new(Symbol::X, 2, 2),
        ]);
        assert!(HistoryLockstepInvariant::holds(&board));
        assert_eq!(board.history(Symbol::X).len(), 2);
    }

    #[test]
    fn test_untracked_mark_violates() {
        let (mut board, _) = replay(&[Move::new(Symbol::X, 0, 0)]);
        board.grid[2][0] = Cell::Occupied(Symbol::X);
        assert!(!HistoryLockstepInvariant::holds(&board));
    }

    #[test]
    fn test_stale_entry_violates() {
        let (mut board, _) = replay(&[Move::new(Symbol::X, 0, 0)]);
        board.grid[0][0] = Cell::Empty;
        board.grid[0][1] = Cell::Occupied(Symbol::X);
        assert!(!HistoryLockstepInvariant::holds(&board));
        assert!(board.history(Symbol::X).contains(Coord::new(0, 0).unwrap()));
    }
}
