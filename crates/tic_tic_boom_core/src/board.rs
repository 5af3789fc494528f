//! Board state: grid, per-symbol histories, turn pointer and terminal flag.

use super::history::MoveHistory;
use super::invariants::{BoardInvariants, InvariantSet};
use super::rules::{self, Line};
use super::types::{Cell, Coord, Grid, Symbol, BOARD_SIZE};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Lifecycle phase of a game, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GamePhase {
    /// No move accepted yet; either symbol may open.
    #[display("not started")]
    NotStarted,
    /// Moves are being accepted.
    #[display("in progress")]
    InProgress,
    /// A line was completed; moves are refused until reset.
    #[display("over")]
    Over,
}

/// A snapshot that does not describe a reachable board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SnapshotError {
    /// A history holds more marks than the cap allows.
    #[display("history holds {len} marks, more than three")]
    OverfullHistory {
        /// Entries found.
        len: usize,
    },
    /// A history names the same cell twice.
    #[display("history lists {coord} twice")]
    RepeatedMark {
        /// The repeated cell.
        coord: Coord,
    },
    /// Grid, histories, turn and terminal flag disagree.
    #[display("inconsistent board: {details}")]
    Inconsistent {
        /// Descriptions of the broken invariants.
        details: String,
    },
}

/// Shared state of one game.
///
/// Mutated only by [`MoveController`](crate::MoveController) and
/// [`GameBoard::reset`]. Everything else is a read-only query.
///
/// Deserialization checks the board invariants, so a loaded snapshot is
/// always one the controller can keep playing on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRecord")]
pub struct GameBoard {
    pub(crate) grid: Grid,
    pub(crate) o_history: MoveHistory,
    pub(crate) x_history: MoveHistory,
    pub(crate) current_turn: Option<Symbol>,
    pub(crate) game_over: bool,
}

/// Unchecked wire form of [`GameBoard`].
#[derive(Deserialize)]
struct BoardRecord {
    grid: Grid,
    o_history: MoveHistory,
    x_history: MoveHistory,
    current_turn: Option<Symbol>,
    game_over: bool,
}

impl TryFrom<BoardRecord> for GameBoard {
    type Error = SnapshotError;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        let board = Self {
            grid: record.grid,
            o_history: record.o_history,
            x_history: record.x_history,
            current_turn: record.current_turn,
            game_over: record.game_over,
        };
        BoardInvariants::check_all(&board).map_err(|violations| SnapshotError::Inconsistent {
            details: violations
                .iter()
                .map(|violation| violation.to_string())
                .collect::<Vec<_>>()
                .join("; "),
        })?;
        Ok(board)
    }
}

impl GameBoard {
    /// Creates an empty board with no turn claimed.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the board back to its initial state. Safe to call at any time.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.grid = Grid::default();
        self.o_history.clear();
        self.x_history.clear();
        self.game_over = false;
        self.current_turn = None;
        info!("Board reset");
    }

    /// Returns true if `symbol` holds a full row, column or diagonal.
    ///
    /// Inspects only the grid; the histories are not consulted.
    #[instrument(level = "debug", skip(self))]
    pub fn check_winner(&self, symbol: Symbol) -> bool {
        rules::check_winner(&self.grid, symbol)
    }

    /// The first line `symbol` holds, if any.
    pub fn winning_line(&self, symbol: Symbol) -> Option<Line> {
        rules::winning_line(&self.grid, symbol)
    }

    /// Contents of one cell.
    pub fn cell(&self, coord: Coord) -> Cell {
        self.grid[coord.row()][coord.col()]
    }

    /// The whole grid, rows first.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// All cells with their coordinates in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::ALL.into_iter().map(|coord| (coord, self.cell(coord)))
    }

    /// Whose move it is; `None` before the first accepted move.
    pub fn current_turn(&self) -> Option<Symbol> {
        self.current_turn
    }

    /// Returns true once a line has been completed.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Live marks of `symbol`, oldest first.
    pub fn history(&self, symbol: Symbol) -> &MoveHistory {
        match symbol {
            Symbol::O => &self.o_history,
            Symbol::X => &self.x_history,
        }
    }

    pub(crate) fn history_mut(&mut self, symbol: Symbol) -> &mut MoveHistory {
        match symbol {
            Symbol::O => &mut self.o_history,
            Symbol::X => &mut self.x_history,
        }
    }

    pub(crate) fn set_cell(&mut self, coord: Coord, cell: Cell) {
        self.grid[coord.row()][coord.col()] = cell;
    }

    /// Counts the grid cells holding `symbol`.
    pub fn marks_on_board(&self, symbol: Symbol) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Occupied(symbol))
            .count()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::Over
        } else if self.current_turn.is_some() {
            GamePhase::InProgress
        } else {
            GamePhase::NotStarted
        }
    }

    /// The winner, once the game is over.
    ///
    /// The turn is frozen on the winning symbol, so this reads it back.
    pub fn winner(&self) -> Option<Symbol> {
        self.current_turn.filter(|_| self.game_over)
    }

    /// Empty cells in row-major order.
    pub fn valid_moves(&self) -> Vec<Coord> {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coord, _)| coord)
            .collect()
    }
}

impl std::fmt::Display for GameBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Occupied(symbol) => write!(f, "{symbol}")?,
                }
                if col + 1 < BOARD_SIZE {
                    write!(f, "|")?;
                }
            }
            if row + 1 < BOARD_SIZE {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
