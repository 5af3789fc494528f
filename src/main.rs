//! Tic Tic Boom - terminal game
//!
//! Plays three-mark tic-tac-toe on stdin/stdout.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tic_tic_boom::{
    parse_moves, run_interactive, run_replay, Cli, CliCommand, GameSession, Settings,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(CliCommand::Play) {
        CliCommand::Play => {
            info!("Starting Tic Tic Boom");
            let mut session = GameSession::new();
            run_interactive(
                &mut session,
                &settings,
                std::io::stdin().lock(),
                std::io::stdout().lock(),
            )
        }
        CliCommand::Replay { moves, json } => {
            let moves = parse_moves(&moves)?;
            run_replay(&moves, json, &settings, std::io::stdout().lock())
        }
    }
}
