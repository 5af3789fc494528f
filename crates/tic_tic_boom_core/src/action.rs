//! Moves and their outcomes.
//!
//! A move is a symbol's request to mark a cell. Every request produces a
//! [`MoveResult`]; refusals are ordinary values, never panics.

use super::types::{Coord, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A symbol asking to mark a cell.
///
/// Row and column are kept raw so out-of-range requests can be represented
/// and refused like any other illegal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{symbol} -> ({row},{col})")]
pub struct Move {
    /// The symbol moving.
    pub symbol: Symbol,
    /// Target row.
    pub row: usize,
    /// Target column.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument(level = "trace")]
    pub fn new(symbol: Symbol, row: usize, col: usize) -> Self {
        Self { symbol, row, col }
    }

    /// The target cell, if it is on the board.
    pub fn coord(&self) -> Option<Coord> {
        Coord::new(self.row, self.col)
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::Error)]
pub enum Rejection {
    /// A line was already completed.
    #[display("game already over")]
    GameOver,
    /// The other symbol holds the turn.
    #[display("not your turn")]
    NotYourTurn,
    /// The target cell holds a mark.
    #[display("cell occupied")]
    CellOccupied,
    /// Row or column is outside the board.
    #[display("invalid coordinates")]
    InvalidCoordinates,
}

/// What an accepted move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// The move completed a line and ended the game.
    pub winning: bool,
    /// The mover's oldest mark, removed because the move was its fourth.
    pub depreciated: Option<Coord>,
}

/// Outcome of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveResult {
    /// The mark was placed.
    #[display("accepted{}", if *winning { " (winning)" } else { "" })]
    Accepted {
        /// The move completed a line.
        winning: bool,
        /// Cell cleared by depreciation, if any.
        depreciated: Option<Coord>,
    },
    /// Refused: the game is over.
    #[display("rejected: {}", Rejection::GameOver)]
    RejectedGameOver,
    /// Refused: the other symbol holds the turn.
    #[display("rejected: {}", Rejection::NotYourTurn)]
    RejectedNotYourTurn,
    /// Refused: the cell already holds a mark.
    #[display("rejected: {}", Rejection::CellOccupied)]
    RejectedCellOccupied,
    /// Refused: row or column off the board.
    #[display("rejected: {}", Rejection::InvalidCoordinates)]
    RejectedInvalidCoordinates,
}

impl MoveResult {
    /// Returns true if the mark was placed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted { .. })
    }

    /// Returns true if the move won the game.
    pub fn is_winning(&self) -> bool {
        matches!(self, MoveResult::Accepted { winning: true, .. })
    }

    /// The refusal reason, if the move was refused.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveResult::Accepted { .. } => None,
            MoveResult::RejectedGameOver => Some(Rejection::GameOver),
            MoveResult::RejectedNotYourTurn => Some(Rejection::NotYourTurn),
            MoveResult::RejectedCellOccupied => Some(Rejection::CellOccupied),
            MoveResult::RejectedInvalidCoordinates => Some(Rejection::InvalidCoordinates),
        }
    }

    /// Converts into a `Result` for callers that want `?`.
    pub fn into_result(self) -> Result<Placement, Rejection> {
        match self {
            MoveResult::Accepted {
                winning,
                depreciated,
            } => Ok(Placement {
                winning,
                depreciated,
            }),
            MoveResult::RejectedGameOver => Err(Rejection::GameOver),
            MoveResult::RejectedNotYourTurn => Err(Rejection::NotYourTurn),
            MoveResult::RejectedCellOccupied => Err(Rejection::CellOccupied),
            MoveResult::RejectedInvalidCoordinates => Err(Rejection::InvalidCoordinates),
        }
    }
}

impl From<Rejection> for MoveResult {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::GameOver => MoveResult::RejectedGameOver,
            Rejection::NotYourTurn => MoveResult::RejectedNotYourTurn,
            Rejection::CellOccupied => MoveResult::RejectedCellOccupied,
            Rejection::InvalidCoordinates => MoveResult::RejectedInvalidCoordinates,
        }
    }
}

impl From<Placement> for MoveResult {
    fn from(placement: Placement) -> Self {
        MoveResult::Accepted {
            winning: placement.winning,
            depreciated: placement.depreciated,
        }
    }
}
