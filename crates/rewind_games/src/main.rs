//! Rewind Games - Unified CLI
//!
//! Interactive play or one-shot replay of a move list.

use anyhow::Result;
use clap::Parser;
use rewind_games::{Cli, Command, RewindConfig, Repl, SessionManager, replay_report};
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RewindConfig::load(cli.config.as_deref())?;
    init_tracing(config.log_filter());

    match cli.command {
        Command::Play { session } => run_play(config, session),
        Command::Replay { moves, jump, json } => run_replay(&config, &moves, jump, json),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Run the interactive REPL on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: RewindConfig, session: String) -> Result<()> {
    info!("Starting interactive play");
    let stdin = io::stdin();
    let mut repl = Repl::new(
        stdin.lock(),
        io::stdout(),
        SessionManager::new(),
        config,
        session,
    )?;
    repl.run()
}

/// Replay a move list and print the selected step
#[instrument(skip(config))]
fn run_replay(config: &RewindConfig, moves: &str, jump: Option<usize>, json: bool) -> Result<()> {
    println!("{}", replay_report(moves, jump, json, config.display())?);
    Ok(())
}
