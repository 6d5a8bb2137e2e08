//! One-shot replay of a move list.

use crate::config::DisplayConfig;
use crate::render::{Snapshot, describe_rejection, render_game};
use crate::repl::parse_moves;
use anyhow::{Context, Result, anyhow};
use rewind_tictactoe::ClassicGame;
use tracing::{info, instrument};

/// Plays `moves` on a fresh game, optionally selects `jump`, and renders the
/// selected step as text or pretty JSON.
///
/// Coordinates in `moves` and in rejection messages follow `display`.
#[instrument(skip(display))]
pub fn replay_report(
    moves: &str,
    jump: Option<usize>,
    json: bool,
    display: &DisplayConfig,
) -> Result<String> {
    let coords = parse_moves(moves, display).context("Invalid move list")?;

    let mut game = ClassicGame::new();
    for (idx, coord) in coords.iter().enumerate() {
        game.apply_move(coord.row, coord.col).map_err(|err| {
            anyhow!("Move #{} rejected: {}", idx + 1, describe_rejection(&err, display))
        })?;
    }
    if let Some(step) = jump {
        game.jump_to(step)
            .map_err(|err| anyhow!("Jump rejected: {}", describe_rejection(&err, display)))?;
    }
    info!(moves = coords.len(), step = game.current_step(), "Replay finished");

    if json {
        Ok(serde_json::to_string_pretty(&Snapshot::of(&game))?)
    } else {
        Ok(render_game(&game, display))
    }
}
