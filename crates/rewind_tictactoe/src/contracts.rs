//! Contract-based validation for move intents.
//!
//! Contracts define correctness through preconditions and postconditions,
//! in the Hoare style `{P} action {Q}`. Preconditions are checked on every
//! intent; postconditions are checked by the engine in debug builds.

use crate::engine::GameEngine;
use crate::error::GameError;
use crate::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use crate::rules::winner;
use crate::types::Coord;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvariantViolation>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the coordinate lies on the board.
pub struct InBounds;

impl InBounds {
    /// Rejects coordinates outside `[0, N)`.
    #[instrument(skip(game))]
    pub fn check<const N: usize>(coord: &Coord, game: &GameEngine<N>) -> Result<(), GameError> {
        if game.current_board().contains(*coord) {
            Ok(())
        } else {
            Err(GameError::OutOfBoundsCoordinate {
                row: coord.row,
                col: coord.col,
                size: N,
            })
        }
    }
}

/// Precondition: the visible step is not already won.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves once a line is complete at the current step.
    #[instrument(skip(game))]
    pub fn check<const N: usize>(game: &GameEngine<N>) -> Result<(), GameError> {
        if let Some(player) = winner(game.current_board()) {
            warn!(%player, "Game already won");
            Err(GameError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the targeted cell is empty at the current step.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto marked cells.
    #[instrument(skip(game))]
    pub fn check<const N: usize>(coord: &Coord, game: &GameEngine<N>) -> Result<(), GameError> {
        if game.current_board().is_empty(*coord) {
            Ok(())
        } else {
            Err(GameError::CellOccupied {
                row: coord.row,
                col: coord.col,
            })
        }
    }
}

/// Composite precondition: bounds, then game over, then occupancy.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check<const N: usize>(coord: &Coord, game: &GameEngine<N>) -> Result<(), GameError> {
        InBounds::check(coord, game)?;
        GameNotOver::check(game)?;
        CellIsEmpty::check(coord, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move intents.
///
/// Postconditions:
/// - history up to the pre-move step is untouched
/// - exactly one entry follows it, and it is now selected
/// - all engine invariants hold
pub struct MoveContract;

impl<const N: usize> Contract<GameEngine<N>, Coord> for MoveContract {
    fn pre(game: &GameEngine<N>, coord: &Coord) -> Result<(), GameError> {
        LegalMove::check(coord, game)
    }

    fn post(before: &GameEngine<N>, after: &GameEngine<N>) -> Result<(), InvariantViolation> {
        let kept = before.current_step() + 1;
        if after.history_len() != kept + 1 || after.current_step() != kept {
            warn!(
                before_step = before.current_step(),
                after_step = after.current_step(),
                after_len = after.history_len(),
                "Move did not append exactly one entry"
            );
            return Err(InvariantViolation::new(
                "Move appends exactly one entry after the selected step",
            ));
        }
        if before.history()[..kept] != after.history()[..kept] {
            warn!(kept, "Move rewrote recorded history");
            return Err(InvariantViolation::new(
                "Move preserves history up to the selected step",
            ));
        }

        EngineInvariants::check_all(after).map_err(|violations| {
            warn!(count = violations.len(), "Engine invariants violated");
            InvariantViolation::combine(&violations)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ClassicGame;
    use crate::types::Cell;

    #[test]
    fn test_precondition_empty_square() {
        let game = ClassicGame::new();
        assert!(MoveContract::pre(&game, &Coord::new(1, 1)).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = ClassicGame::replay([(1, 1)]).unwrap();
        assert_eq!(
            MoveContract::pre(&game, &Coord::new(1, 1)),
            Err(GameError::CellOccupied { row: 1, col: 1 })
        );
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        let game = ClassicGame::new();
        assert!(matches!(
            MoveContract::pre(&game, &Coord::new(0, 3)),
            Err(GameError::OutOfBoundsCoordinate { size: 3, .. })
        ));
    }

    #[test]
    fn test_bounds_checked_before_game_over() {
        let game = ClassicGame::replay([(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]).unwrap();
        assert!(matches!(
            LegalMove::check(&Coord::new(9, 9), &game),
            Err(GameError::OutOfBoundsCoordinate { .. })
        ));
        // Occupied and over: game over wins.
        assert_eq!(
            LegalMove::check(&Coord::new(0, 0), &game),
            Err(GameError::GameAlreadyOver)
        );
    }

    #[test]
    fn test_game_not_over_rejects_either_winner() {
        let x_won = ClassicGame::replay([(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]).unwrap();
        assert_eq!(GameNotOver::check(&x_won), Err(GameError::GameAlreadyOver));

        let mut o_won =
            ClassicGame::replay([(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)]).unwrap();
        assert_eq!(GameNotOver::check(&o_won), Err(GameError::GameAlreadyOver));

        o_won.jump_to(5).unwrap();
        assert!(GameNotOver::check(&o_won).is_ok());
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = ClassicGame::new();
        let mut after = before.clone();
        after.apply_move(1, 1).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_holds_after_branching_move() {
        let mut before = ClassicGame::replay([(0, 0), (1, 1), (2, 2)]).unwrap();
        before.jump_to(1).unwrap();
        let mut after = before.clone();
        after.apply_move(0, 2).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = ClassicGame::new();
        let mut after = before.clone();
        after.apply_move(1, 1).unwrap();
        after.history_mut()[1]
            .board_mut()
            .set(Coord::new(0, 0), Cell::O)
            .unwrap();
        assert!(MoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_missing_entry() {
        let before = ClassicGame::new();
        assert!(MoveContract::post(&before, &before).is_err());
    }
}
