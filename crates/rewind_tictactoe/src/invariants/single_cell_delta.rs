//! Single-cell delta invariant: each move changes exactly its own cell.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Player;

/// Invariant: consecutive boards differ only in the recorded move's cell.
///
/// The mark placed there belongs to the player whose turn it was at the
/// previous step, so X and O strictly alternate.
pub struct SingleCellDelta;

impl<const N: usize> Invariant<GameEngine<N>> for SingleCellDelta {
    fn holds(game: &GameEngine<N>) -> bool {
        game.history()
            .windows(2)
            .enumerate()
            .all(|(prev_step, pair)| {
                let (before, after) = (&pair[0], &pair[1]);
                let Some(mv) = after.last_move() else {
                    return false;
                };
                let mover = Player::for_step(prev_step);
                mv.player == mover
                    && before.board().diff(after.board()) == vec![mv.coord]
                    && before.board().is_empty(mv.coord)
                    && after.board().get(mv.coord) == Some(mover.cell())
            })
    }

    fn description() -> &'static str {
        "Each move changes exactly one empty cell to the mover's mark"
    }
}
