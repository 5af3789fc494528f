//! Game session: one board, two controllers and a running win tally.

use serde::{Deserialize, Serialize};
use tic_tic_boom_core::{GameBoard, Move, MoveController, MoveResult, Symbol};
use tracing::{debug, info, instrument};

/// Wins per symbol across resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Games won by O.
    pub o_wins: u32,
    /// Games won by X.
    pub x_wins: u32,
    /// Games reset before anyone won.
    pub abandoned: u32,
}

impl Tally {
    fn record(&mut self, winner: Option<Symbol>) {
        match winner {
            Some(Symbol::O) => self.o_wins += 1,
            Some(Symbol::X) => self.x_wins += 1,
            None => self.abandoned += 1,
        }
    }
}

/// A running game as seen by the front end.
///
/// The session owns the board and lends it to whichever controller moves.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: GameBoard,
    circle: MoveController,
    cross: MoveController,
    tally: Tally,
}

impl GameSession {
    /// Creates a session with an empty board.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self {
            board: GameBoard::new(),
            circle: MoveController::circle(),
            cross: MoveController::cross(),
            tally: Tally::default(),
        }
    }

    /// The board.
    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    /// Results of games ended by [`GameSession::reset`].
    pub fn tally(&self) -> Tally {
        self.tally
    }

    fn controller(&self, symbol: Symbol) -> MoveController {
        match symbol {
            Symbol::O => self.circle,
            Symbol::X => self.cross,
        }
    }

    /// Plays `(row, col)` for whoever holds the turn. X opens an unclaimed
    /// game.
    #[instrument(skip(self))]
    pub fn handle_move(&mut self, row: usize, col: usize) -> (Move, MoveResult) {
        let symbol = self.board.current_turn().unwrap_or(Symbol::X);
        self.play_as(symbol, row, col)
    }

    /// Plays `(row, col)` for `symbol`, whether or not it holds the turn.
    #[instrument(skip(self))]
    pub fn play_as(&mut self, symbol: Symbol, row: usize, col: usize) -> (Move, MoveResult) {
        let result = self.controller(symbol).make_move(&mut self.board, row, col);
        debug!(%result, "Move handled");
        (Move::new(symbol, row, col), result)
    }

    /// Starts a new game, counting the one in progress.
    ///
    /// A board nobody has played on is not counted.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        if self.board.current_turn().is_some() {
            self.tally.record(self.board.winner());
        }
        self.board.reset();
        info!(tally = ?self.tally, "Session reset");
    }

    /// One-line status for the current board.
    pub fn status_text(&self) -> String {
        match (self.board.winner(), self.board.current_turn()) {
            (Some(winner), _) => format!("Game over! {} wins!", winner),
            (None, Some(turn)) => format!("{}'s turn", turn),
            (None, None) => "Next move! Either symbol may start.".to_string(),
        }
    }

    /// User-facing text for the outcome of `action`.
    pub fn describe(&self, action: &Move, result: &MoveResult) -> String {
        let Move { symbol, row, col } = *action;
        match result {
            MoveResult::Accepted { winning, depreciated } => {
                let mut text = format!("{} placed at ({},{})", symbol, row, col);
                if let Some(oldest) = depreciated {
                    text.push_str(&format!("; {}'s mark at {} was removed", symbol, oldest));
                }
                if *winning {
                    text.push_str(&format!(". {} wins!", symbol));
                }
                text
            }
            MoveResult::RejectedGameOver => "Game is over. Press reset to play again.".to_string(),
            MoveResult::RejectedNotYourTurn => match self.board.current_turn() {
                Some(turn) => format!("It's not {}'s turn. It's {}'s turn.", symbol, turn),
                None => format!("It's not {}'s turn.", symbol),
            },
            MoveResult::RejectedCellOccupied => {
                format!("{} tried ({},{}) but it's taken.", symbol, row, col)
            }
            MoveResult::RejectedInvalidCoordinates => {
                format!("({},{}) is off the board. Rows and columns run 0-2.", row, col)
            }
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
