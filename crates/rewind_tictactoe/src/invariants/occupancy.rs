//! Occupancy invariant: entry `i` has exactly `i` marks.

use super::Invariant;
use crate::engine::GameEngine;

/// Invariant: each history entry holds one more mark than its predecessor.
///
/// Entry 0 is the empty board with no move; every later entry records the
/// move that produced it.
pub struct OccupancyMatchesStep;

impl<const N: usize> Invariant<GameEngine<N>> for OccupancyMatchesStep {
    fn holds(game: &GameEngine<N>) -> bool {
        game.history().iter().enumerate().all(|(step, entry)| {
            entry.board().filled_count() == step && entry.last_move().is_some() == (step > 0)
        })
    }

    fn description() -> &'static str {
        "History entry i holds exactly i marks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ClassicGame;
    use crate::types::{Cell, Coord};

    #[test]
    fn test_empty_game_holds() {
        assert!(OccupancyMatchesStep::holds(&ClassicGame::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let game = ClassicGame::replay([(0, 0), (1, 1), (0, 2), (2, 0)]).unwrap();
        assert!(OccupancyMatchesStep::holds(&game));
        assert_eq!(game.history_len(), 5);
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut game = ClassicGame::replay([(1, 1)]).unwrap();
        game.history_mut()[1]
            .board_mut()
            .set(Coord::new(2, 2), Cell::O)
            .unwrap();
        assert!(!OccupancyMatchesStep::holds(&game));
    }

    #[test]
    fn test_marked_initial_board_violates() {
        let mut game = ClassicGame::new();
        game.history_mut()[0]
            .board_mut()
            .set(Coord::new(0, 0), Cell::X)
            .unwrap();
        assert!(!OccupancyMatchesStep::holds(&game));
    }
}
