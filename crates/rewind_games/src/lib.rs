//! Rewind Games - terminal front end for rewindable tic-tac-toe
//!
//! This crate is the presentation collaborator for `rewind_tictactoe`. It
//! turns typed commands into move and jump intents and draws whatever the
//! engine derives.
//!
//! # Architecture
//!
//! - **Config**: TOML display and logging options
//! - **Session**: named games behind a shared lock, one engine each
//! - **Render**: board, status and move-list text, plus JSON snapshots
//! - **REPL**: line-based command loop over any reader and writer
//! - **Replay**: one-shot rendering of a move list

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod render;
mod repl;
mod replay;
mod session;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DisplayConfig, RewindConfig};
pub use render::{
    Snapshot, describe_rejection, move_label, render_board, render_game, render_history,
};
pub use repl::{CommandError, Repl, ReplCommand, parse_moves};
pub use replay::replay_report;
pub use session::{GameSession, SessionError, SessionId, SessionManager};
