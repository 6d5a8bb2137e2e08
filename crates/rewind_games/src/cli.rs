//! Command-line interface for rewind_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind Games - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind_games")]
#[command(about = "Tic-tac-toe with a rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Name of the first game session
        #[arg(long, default_value = "main")]
        session: String,
    },

    /// Apply a move list and print the resulting position
    Replay {
        /// Moves as space-separated `row,col` pairs, e.g. "1,1 2,2 1,2"
        #[arg(short, long)]
        moves: String,

        /// Step to select after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print a JSON snapshot instead of the board
        #[arg(long)]
        json: bool,
    },
}
