//! Step range invariant: the selected step is a recorded history entry.

use super::Invariant;
use crate::engine::GameEngine;

/// Invariant: `current_step` indexes into a non-empty history.
pub struct StepInRange;

impl<const N: usize> Invariant<GameEngine<N>> for StepInRange {
    fn holds(game: &GameEngine<N>) -> bool {
        !game.history().is_empty() && game.current_step() < game.history().len()
    }

    fn description() -> &'static str {
        "Current step lies within recorded history"
    }
}
