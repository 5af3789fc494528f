//! Per-symbol move controller.
//!
//! A controller carries only its symbol. The board it plays on is owned
//! elsewhere and lent for the duration of each call, so two controllers can
//! share one board without shared ownership.

use super::action::{Move, MoveResult};
use super::board::GameBoard;
use super::contracts::{Contract, MoveContract};
use super::types::{Cell, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Validates and applies one symbol's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveController {
    symbol: Symbol,
}

impl MoveController {
    /// Creates a controller for `symbol`.
    pub fn new(symbol: Symbol) -> Self {
        Self { symbol }
    }

    /// Controller for O.
    pub fn circle() -> Self {
        Self::new(Symbol::O)
    }

    /// Controller for X.
    pub fn cross() -> Self {
        Self::new(Symbol::X)
    }

    /// The symbol this controller places.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Attempts to mark `(row, col)` for this controller's symbol.
    ///
    /// Refusals leave `board` untouched. An accepted move runs in a fixed
    /// order: place, record, depreciate the oldest mark past the third,
    /// check for a win on the resulting grid, then hand over the turn. A
    /// winning move keeps the turn so it names the winner.
    #[instrument(skip(self, board), fields(symbol = %self.symbol))]
    pub fn make_move(&self, board: &mut GameBoard, row: usize, col: usize) -> MoveResult {
        let action = Move::new(self.symbol, row, col);
        let coord = match MoveContract::pre(board, &action) {
            Ok(coord) => coord,
            Err(rejection) => {
                debug!(%rejection, "Move refused");
                return rejection.into();
            }
        };

        #[cfg(debug_assertions)]
        let before = board.clone();

        if board.current_turn.is_none() {
            info!("First move claims the turn");
            board.current_turn = Some(self.symbol);
        }

        board.set_cell(coord, Cell::Occupied(self.symbol));
        let depreciated = board.history_mut(self.symbol).push(coord);
        if let Some(oldest) = depreciated {
            board.set_cell(oldest, Cell::Empty);
            info!(%oldest, "Oldest mark depreciated");
        }

        let winning = board.check_winner(self.symbol);
        if winning {
            board.game_over = true;
            info!(%coord, "Winning move");
        } else {
            board.current_turn = Some(self.symbol.opponent());
            debug!(%coord, "Move placed");
        }

        #[cfg(debug_assertions)]
        super::contracts::assert_invariants(&before, board);

        MoveResult::Accepted {
            winning,
            depreciated,
        }
    }

    /// Applies `action` if it belongs to this controller's symbol.
    ///
    /// A move for the other symbol is refused as out of turn.
    pub fn apply(&self, board: &mut GameBoard, action: Move) -> MoveResult {
        if action.symbol != self.symbol {
            return MoveResult::RejectedNotYourTurn;
        }
        self.make_move(board, action.row, action.col)
    }
}

/// Plays `moves` in order on a fresh board.
///
/// Refused moves are kept in the results and play carries on, so the
/// returned board is what an interactive session would show afterwards.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay(moves: &[Move]) -> (GameBoard, Vec<MoveResult>) {
    let mut board = GameBoard::new();
    let results = moves
        .iter()
        .map(|action| MoveController::new(action.symbol).apply(&mut board, *action))
        .collect();
    (board, results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, GamePhase, MAX_ACTIVE_MARKS};

    fn coord(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_first_move_claims_turn_for_either_symbol() {
        for symbol in [Symbol::O, Symbol::X] {
            let mut board = GameBoard::new();
            let result = MoveController::new(symbol).make_move(&mut board, 1, 1);
            assert!(result.is_accepted());
            assert_eq!(board.current_turn(), Some(symbol.opponent()));
            assert_eq!(board.phase(), GamePhase::InProgress);
        }
    }

    #[test]
    fn test_out_of_turn_leaves_board_unchanged() {
        let mut board = GameBoard::new();
        let circle = MoveController::circle();
        circle.make_move(&mut board, 0, 0);
        let snapshot = board.clone();
        assert_eq!(circle.make_move(&mut board, 1, 1), MoveResult::RejectedNotYourTurn);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_invalid_coordinates_on_fresh_board_do_not_claim_turn() {
        let mut board = GameBoard::new();
        let result = MoveController::cross().make_move(&mut board, 3, 1);
        assert_eq!(result, MoveResult::RejectedInvalidCoordinates);
        assert_eq!(board, GameBoard::new());
        assert_eq!(board.current_turn(), None);
    }

    #[test]
    fn test_fourth_mark_reports_depreciated_cell() {
        let mut board = GameBoard::new();
        let (circle, cross) = (MoveController::circle(), MoveController::cross());
        circle.make_move(&mut board, 0, 0);
        cross.make_move(&mut board, 2, 2);
        circle.make_move(&mut board, 1, 1);
        cross.make_move(&mut board, 2, 1);
        circle.make_move(&mut board, 1, 2);
        cross.make_move(&mut board, 1, 0);
        let result = circle.make_move(&mut board, 0, 2);
        assert_eq!(
            result,
            MoveResult::Accepted {
                winning: false,
                depreciated: Some(coord(0, 0))
            }
        );
        assert_eq!(board.cell(coord(0, 0)), Cell::Empty);
        assert_eq!(board.history(Symbol::O).len(), MAX_ACTIVE_MARKS);
    }

    #[test]
    fn test_depreciation_runs_before_win_check() {
        // O holds (0,0) (0,1) (2,2). Playing (0,2) would complete row 0,
        // but it is O's fourth mark, so (0,0) goes first and no line remains.
        let (mut board, results) = replay(&[
            Move::new(Symbol::O, 0, 0),
            Move::new(Symbol::X, 1, 0),
            Move::new(Symbol::O, 0, 1),
            Move::new(Symbol::X, 2, 0),
            Move::new(Symbol::O, 2, 2),
            Move::new(Symbol::X, 2, 1),
        ]);
        assert!(results.iter().all(MoveResult::is_accepted));
        let result = MoveController::circle().make_move(&mut board, 0, 2);
        assert_eq!(
            result,
            MoveResult::Accepted {
                winning: false,
                depreciated: Some(coord(0, 0))
            }
        );
        assert!(!board.is_game_over());
        assert_eq!(board.current_turn(), Some(Symbol::X));
    }

    #[test]
    fn test_win_holds_on_post_depreciation_grid() {
        // X's fourth mark drops (0,0); the three left form the anti-diagonal.
        let (board, results) = replay(&[
            Move::new(Symbol::X, 0, 0),
            Move::new(Symbol::O, 1, 0),
            Move::new(Symbol::X, 0, 2),
            Move::new(Symbol::O, 2, 2),
            Move::new(Symbol::X, 1, 1),
            Move::new(Symbol::O, 0, 1),
            Move::new(Symbol::X, 2, 0),
        ]);
        assert_eq!(
            results.last(),
            Some(&MoveResult::Accepted {
                winning: true,
                depreciated: Some(coord(0, 0))
            })
        );
        assert_eq!(board.winner(), Some(Symbol::X));
    }

    #[test]
    fn test_win_freezes_turn_on_winner() {
        let (board, results) = replay(&[
            Move::new(Symbol::X, 0, 0),
            Move::new(Symbol::O, 2, 0),
            Move::new(Symbol::X, 1, 1),
            Move::new(Symbol::O, 2, 1),
            Move::new(Symbol::X, 2, 2),
        ]);
        assert!(results.last().is_some_and(MoveResult::is_winning));
        assert!(board.is_game_over());
        assert_eq!(board.current_turn(), Some(Symbol::X));
        assert_eq!(board.phase(), GamePhase::Over);
    }

    #[test]
    fn test_apply_refuses_foreign_move() {
        let mut board = GameBoard::new();
        let result = MoveController::circle().apply(&mut board, Move::new(Symbol::X, 0, 0));
        assert_eq!(result, MoveResult::RejectedNotYourTurn);
        assert_eq!(board, GameBoard::new());
    }

    #[test]
    fn test_replay_keeps_going_after_refusal() {
        let (board, results) = replay(&[
            Move::new(Symbol::O, 0, 0),
            Move::new(Symbol::O, 0, 1),
            Move::new(Symbol::X, 0, 0),
            Move::new(Symbol::X, 2, 2),
        ]);
        assert_eq!(
            results.iter().map(MoveResult::rejection).collect::<Vec<_>>(),
            vec![
                None,
                Some(crate::Rejection::NotYourTurn),
                Some(crate::Rejection::CellOccupied),
                None
            ]
        );
        assert_eq!(board.cell(coord(2, 2)), Cell::Occupied(Symbol::X));
        assert_eq!(board.current_turn(), Some(Symbol::O));
    }
}
