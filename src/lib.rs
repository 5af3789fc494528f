//! Tic Tic Boom - terminal front end for three-mark tic-tac-toe
//!
//! The rules live in [`tic_tic_boom_core`]; this crate owns a session,
//! turns player input into moves and draws the board.
//!
//! # Architecture
//!
//! - **Session**: owns the board and both move controllers, keeps a win tally
//! - **Commands**: parses typed input and scripted move lists
//! - **Render**: draws the grid and each symbol's live marks
//! - **Play**: interactive and scripted game loops
//!
//! # Example
//!
//! ```
//! use tic_tic_boom::{GameSession, Symbol};
//!
//! let mut session = GameSession::new();
//! let (action, result) = session.play_as(Symbol::O, 0, 0);
//! assert!(result.is_accepted());
//! assert_eq!(session.describe(&action, &result), "O placed at (0,0)");
//! assert_eq!(session.status_text(), "X's turn");
//! ```

#![warn(missing_docs)]

// Private module declarations
mod cli;
mod commands;
mod config;
mod play;
mod render;
mod session;

// Crate-level exports - CLI
pub use cli::{Cli, Command as CliCommand};

// Crate-level exports - Input parsing
pub use commands::{parse_moves, Command, CommandError, HELP};

// Crate-level exports - Settings
pub use config::{ConfigError, Settings};

// Crate-level exports - Game loops and rendering
pub use play::{run_interactive, run_replay};
pub use render::{render_board, render_frame, render_histories};

// Crate-level exports - Session management
pub use session::{GameSession, Tally};

// Crate-level exports - Rule engine
pub use tic_tic_boom_core::{
    Cell, Coord, GameBoard, GamePhase, Move, MoveController, MoveHistory, MoveResult, Placement,
    Rejection, Symbol,
};
