//! Text commands accepted by the terminal front end.

use derive_more::{Display, Error};
use std::str::FromStr;
use tic_tic_boom_core::{Move, Symbol};
use tracing::instrument;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Mark a cell for whoever holds the turn: `1 2`.
    Place {
        /// Target row.
        row: usize,
        /// Target column.
        col: usize,
    },
    /// Mark a cell for a named symbol: `o 1 2`.
    PlaceAs {
        /// Symbol to move.
        symbol: Symbol,
        /// Target row.
        row: usize,
        /// Target column.
        col: usize,
    },
    /// Start a new game.
    Reset,
    /// Redraw the board.
    Board,
    /// Print the board state as JSON.
    Json,
    /// List commands.
    Help,
    /// Leave the game.
    Quit,
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  <row> <col>           mark a cell for whoever holds the turn (0-2 each)
  <o|x> <row> <col>     mark a cell for a specific symbol
  reset                 start a new game
  board                 redraw the board
  json                  print the board state as JSON
  help                  show this list
  quit                  leave";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = input.split_whitespace().collect();
        match words.as_slice() {
            [] => Err(CommandError::new("Empty command")),
            [word] => match word.to_ascii_lowercase().as_str() {
                "reset" | "r" => Ok(Command::Reset),
                "board" | "b" => Ok(Command::Board),
                "json" => Ok(Command::Json),
                "help" | "h" | "?" => Ok(Command::Help),
                "quit" | "q" | "exit" => Ok(Command::Quit),
                other => Err(CommandError::new(format!("Unknown command '{}'", other))),
            },
            [row, col] => Ok(Command::Place {
                row: parse_index(row)?,
                col: parse_index(col)?,
            }),
            [symbol, row, col] => Ok(Command::PlaceAs {
                symbol: parse_symbol(symbol)?,
                row: parse_index(row)?,
                col: parse_index(col)?,
            }),
            _ => Err(CommandError::new(format!(
                "Too many words in '{}'",
                input.trim()
            ))),
        }
    }
}

/// Parses a move list such as `"O:0,0 X:1,0 O:0,1"`.
///
/// Moves are separated by whitespace; each is `<symbol>:<row>,<col>`.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<Move>, CommandError> {
    input.split_whitespace().map(parse_move).collect()
}

fn parse_move(token: &str) -> Result<Move, CommandError> {
    let (symbol, cell) = token
        .split_once(':')
        .ok_or_else(|| CommandError::new(format!("Move '{}' is missing ':'", token)))?;
    let (row, col) = cell
        .split_once(',')
        .ok_or_else(|| CommandError::new(format!("Move '{}' is missing ','", token)))?;
    Ok(Move::new(
        parse_symbol(symbol)?,
        parse_index(row)?,
        parse_index(col)?,
    ))
}

fn parse_symbol(word: &str) -> Result<Symbol, CommandError> {
    word.trim()
        .parse()
        .map_err(|_| CommandError::new(format!("'{}' is not a symbol (use O or X)", word)))
}

fn parse_index(word: &str) -> Result<usize, CommandError> {
    word.trim()
        .parse()
        .map_err(|_| CommandError::new(format!("'{}' is not a row or column number", word)))
}

/// Input that could not be understood.
#[derive(Debug, Clone, Display, Error)]
#[display("Command error: {} at {}:{}", message, file, line)]
pub struct CommandError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CommandError {
    /// Creates a new command error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
