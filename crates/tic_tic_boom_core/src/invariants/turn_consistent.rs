//! Turn consistency invariant: turn pointer, terminal flag and grid agree.

use super::super::{GameBoard, Symbol};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: an unclaimed turn means an untouched board, and a finished
/// game has its turn frozen on a symbol that holds a line.
pub struct TurnConsistentInvariant;

impl Invariant<GameBoard> for TurnConsistentInvariant {
    fn holds(board: &GameBoard) -> bool {
        match board.current_turn() {
            None => {
                !board.is_game_over()
                    && board.cells().all(|(_, cell)| cell.is_empty())
                    && Symbol::iter().all(|symbol| board.history(symbol).is_empty())
            }
            Some(turn) => !board.is_game_over() || board.check_winner(turn),
        }
    }

    fn description() -> &'static str {
        "Turn pointer and terminal flag agree with the grid"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{replay, Cell, Move};

    #[test]
    fn test_won_game_holds() {
        let (board, _) = replay(&[
            Move::new(Symbol::O, 0, 0),
            Move::new(Symbol::X, 1, 0),
            Move::new(Symbol::O, 0, 1),
            Move::new(Symbol::X, 1, 1),
            Move::new(Symbol::O, 0, 2),
        ]);
        assert!(board.is_game_over());
        assert!(TurnConsistentInvariant::holds(&board));
    }

    #[test]
    fn test_marks_without_turn_violate() {
        let mut board = GameBoard::new();
        board.grid[1][1] = Cell::Occupied(Symbol::O);
        assert!(!TurnConsistentInvariant::holds(&board));
    }

    #[test]
    fn test_game_over_without_line_violates() {
        let (mut board, _) = replay(&[Move::new(Symbol::O, 0, 0)]);
        board.game_over = true;
        assert!(!TurnConsistentInvariant::holds(&board));
    }
}
