//! Derived game status.

use crate::types::{Coord, Player};
use serde::Serialize;

/// Ordered coordinates of a completed row, column, or diagonal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WinLine {
    cells: Vec<Coord>,
}

impl WinLine {
    /// Creates a line from its coordinates.
    pub fn new(cells: Vec<Coord>) -> Self {
        Self { cells }
    }

    /// Coordinates in scan order.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Returns true if `coord` is part of this line.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}

impl<const K: usize> From<[(usize, usize); K]> for WinLine {
    fn from(cells: [(usize, usize); K]) -> Self {
        Self::new(cells.into_iter().map(Coord::from).collect())
    }
}

/// Status of the game at the selected history step.
///
/// Never stored; the engine derives it from the visible board and step
/// each time it is asked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GameStatus {
    /// Moves may still be made.
    InProgress {
        /// Player who moves next.
        next_player: Player,
    },
    /// A line is complete.
    Won {
        /// Owner of the winning line.
        winner: Player,
        /// The first complete line in scan order.
        line: WinLine,
    },
    /// Board full, no line complete.
    Tied,
}

impl GameStatus {
    /// Returns true for `Won` and `Tied`.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// Winner, if the game is won.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Winning line, if the game is won.
    pub fn winning_line(&self) -> Option<&WinLine> {
        match self {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next_player } => write!(f, "Next player: {}", next_player),
            GameStatus::Won { winner, .. } => write!(f, "Winner is: {}", winner),
            GameStatus::Tied => write!(f, "No winner: Tie"),
        }
    }
}
