//! Rule engine for three-mark tic-tac-toe.
//!
//! Each symbol may keep at most three marks on the board. A fourth placement
//! depreciates (removes) that symbol's oldest surviving mark before the win
//! check runs.
//!
//! # Architecture
//!
//! - **Board**: [`GameBoard`] owns the grid, both [`MoveHistory`] queues, the
//!   turn pointer and the terminal flag.
//! - **Controller**: [`MoveController`] carries one [`Symbol`] and applies
//!   that symbol's moves to a board lent by the caller.
//! - **Contracts**: preconditions decide each refusal; postconditions and
//!   [`invariants`] are verified after accepted moves in debug builds.
//!
//! # Example
//!
//! ```
//! use tic_tic_boom_core::{GameBoard, MoveController, MoveResult, Symbol};
//!
//! let mut board = GameBoard::new();
//! let circle = MoveController::circle();
//! let cross = MoveController::cross();
//!
//! assert!(circle.make_move(&mut board, 0, 0).is_accepted());
//! assert_eq!(circle.make_move(&mut board, 1, 1), MoveResult::RejectedNotYourTurn);
//! assert!(cross.make_move(&mut board, 1, 1).is_accepted());
//! assert_eq!(board.current_turn(), Some(Symbol::O));
//! ```

#![warn(missing_docs)]

mod action;
mod board;
mod controller;
mod history;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveResult, Placement, Rejection};
pub use board::{GameBoard, GamePhase, SnapshotError};
pub use controller::{replay, MoveController};
pub use history::MoveHistory;
pub use types::{Cell, Coord, Grid, OffBoard, Symbol, BOARD_SIZE, CELL_COUNT, MAX_ACTIVE_MARKS};
