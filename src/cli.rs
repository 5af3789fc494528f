//! Command-line interface for tic_tic_boom.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic Tic Boom - tic-tac-toe where your fourth mark wipes out your first
#[derive(Parser, Debug)]
#[command(name = "tic_tic_boom")]
#[command(about = "Three-mark tic-tac-toe with move depreciation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively on the terminal
    Play,

    /// Play a fixed list of moves and print the outcome
    Replay {
        /// Moves as `<symbol>:<row>,<col>` separated by spaces, e.g. "O:0,0 X:1,0"
        #[arg(short, long)]
        moves: String,

        /// Print the final board as JSON
        #[arg(long)]
        json: bool,
    },
}
