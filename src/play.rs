//! Interactive and scripted game loops.

use crate::commands::{Command, HELP};
use crate::config::Settings;
use crate::render::render_frame;
use crate::session::GameSession;
use anyhow::Result;
use std::io::{BufRead, Write};
use tic_tic_boom_core::Move;
use tracing::{info, instrument, warn};

/// Reads commands line by line until `quit` or end of input.
#[instrument(skip_all)]
pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut GameSession,
    settings: &Settings,
    input: R,
    mut output: W,
) -> Result<()> {
    info!("Starting interactive game");
    writeln!(output, "{}", render_frame(session.board(), settings, &session.status_text()))?;
    writeln!(output, "Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!(error = %e, "Unreadable command");
                writeln!(output, "{}", e.message)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Json => writeln!(output, "{}", serde_json::to_string_pretty(session.board())?)?,
            Command::Board => {
                writeln!(output, "{}", render_frame(session.board(), settings, &session.status_text()))?
            }
            Command::Reset => {
                session.reset();
                writeln!(output, "Game has been reset. Let's play again!")?;
                writeln!(output, "{}", render_frame(session.board(), settings, &session.status_text()))?;
            }
            Command::Place { row, col } => {
                let (action, result) = session.handle_move(row, col);
                writeln!(output, "{}", session.describe(&action, &result))?;
                writeln!(output, "{}", render_frame(session.board(), settings, &session.status_text()))?;
            }
            Command::PlaceAs { symbol, row, col } => {
                let (action, result) = session.play_as(symbol, row, col);
                writeln!(output, "{}", session.describe(&action, &result))?;
                writeln!(output, "{}", render_frame(session.board(), settings, &session.status_text()))?;
            }
        }
    }

    let tally = session.tally();
    info!(?tally, "Interactive game finished");
    Ok(())
}

/// Plays a fixed move list, printing each outcome, then the final board or
/// its JSON snapshot.
#[instrument(skip(moves, settings, output), fields(count = moves.len()))]
pub fn run_replay<W: Write>(
    moves: &[Move],
    json: bool,
    settings: &Settings,
    mut output: W,
) -> Result<()> {
    let mut session = GameSession::new();
    for action in moves {
        let (action, result) = session.play_as(action.symbol, action.row, action.col);
        writeln!(output, "{}: {}", action, session.describe(&action, &result))?;
    }

    if json {
        writeln!(output, "{}", serde_json::to_string_pretty(session.board())?)?;
    } else {
        writeln!(output, "{}", render_frame(session.board(), settings, &session.status_text()))?;
    }
    Ok(())
}
