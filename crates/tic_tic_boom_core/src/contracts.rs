//! Contract-based validation for moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}. Preconditions
//! decide whether a move is refused; postconditions verify the board after
//! an accepted move.

use super::action::{Move, Rejection};
use super::board::GameBoard;
use super::invariants::{BoardInvariants, InvariantSet, InvariantViolation};
use super::types::{Coord, Symbol};
use strum::IntoEnumIterator;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// What a passing precondition establishes about the action.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: no line has been completed yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Refuses any move once the game is over.
    #[instrument(level = "trace", skip(board))]
    pub fn check(board: &GameBoard) -> Result<(), Rejection> {
        if board.is_game_over() {
            Err(Rejection::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target is on the board.
pub struct CoordinatesInRange;

impl CoordinatesInRange {
    /// Returns the validated coordinate.
    #[instrument(level = "trace")]
    pub fn check(mov: &Move) -> Result<Coord, Rejection> {
        mov.coord().ok_or(Rejection::InvalidCoordinates)
    }
}

/// Precondition: the mover holds the turn, or nobody does yet.
pub struct PlayersTurn;

impl PlayersTurn {
    /// An unclaimed turn is open to either symbol.
    #[instrument(level = "trace", skip(board))]
    pub fn check(mov: &Move, board: &GameBoard) -> Result<(), Rejection> {
        match board.current_turn() {
            Some(turn) if turn != mov.symbol => Err(Rejection::NotYourTurn),
            _ => Ok(()),
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Refuses a move onto either symbol's mark.
    #[instrument(level = "trace", skip(board))]
    pub fn check(coord: Coord, board: &GameBoard) -> Result<(), Rejection> {
        if board.cell(coord).is_empty() {
            Ok(())
        } else {
            Err(Rejection::CellOccupied)
        }
    }
}

/// Composite precondition, checked in refusal order: game over, coordinates,
/// turn, occupancy.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions and returns the target cell.
    #[instrument(level = "debug", skip(board))]
    pub fn check(mov: &Move, board: &GameBoard) -> Result<Coord, Rejection> {
        GameNotOver::check(board)?;
        let coord = CoordinatesInRange::check(mov)?;
        PlayersTurn::check(mov, board)?;
        CellIsEmpty::check(coord, board)?;
        Ok(coord)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: see [`LegalMove`].
///
/// Postconditions:
/// - every [`BoardInvariants`] member holds afterwards
/// - the move added at most one mark net (depreciation cancels the placement)
pub struct MoveContract;

impl Contract<GameBoard, Move> for MoveContract {
    type Checked = Coord;

    fn pre(board: &GameBoard, action: &Move) -> Result<Coord, Rejection> {
        LegalMove::check(action, board)
    }

    fn post(before: &GameBoard, after: &GameBoard) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match BoardInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        let count = |board: &GameBoard| -> usize {
            Symbol::iter().map(|s| board.marks_on_board(s)).sum()
        };
        let (was, now) = (count(before), count(after));
        if now != was && now != was + 1 {
            violations.push(InvariantViolation::new(format!(
                "Mark count moved from {was} to {now} in one move"
            )));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Asserts the move postconditions (debug builds only).
#[instrument(level = "trace", skip_all)]
pub fn assert_invariants(before: &GameBoard, after: &GameBoard) {
    let result = MoveContract::post(before, after);
    if let Err(violations) = &result {
        warn!(?violations, "Board postcondition violated");
    }
    debug_assert!(result.is_ok(), "Board postcondition violated: {result:?}");
}
