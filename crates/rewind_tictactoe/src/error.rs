//! Rejected intents.

use derive_more::{Display, Error};

/// Error returned when a move or jump intent is rejected.
///
/// A rejected intent never mutates the engine. Nothing here is fatal;
/// callers that prefer to ignore bad input can log and carry on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum GameError {
    /// Coordinate lies outside the board.
    #[display("Coordinate ({}, {}) is outside the {}x{} board", row, col, size, size)]
    OutOfBoundsCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board side length.
        size: usize,
    },

    /// The targeted cell already holds a mark.
    #[display("Cell ({}, {}) is already occupied", row, col)]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The current step is already won.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// Jump target is not a recorded history step.
    #[display("Step {} is not in history (0..{})", step, len)]
    InvalidHistoryStep {
        /// Requested step.
        step: usize,
        /// Number of recorded history entries.
        len: usize,
    },
}
