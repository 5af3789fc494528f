//! Game rules for three-mark tic-tac-toe.
//!
//! Rules are pure functions over the grid, kept apart from board storage so
//! contracts and invariants can reuse them.

pub mod win;

pub use win::{check_winner, winning_line, Line, LINES};
