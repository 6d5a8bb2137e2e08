//! Recorded game history.

use crate::board::Board;
use crate::types::Move;
use serde::Serialize;

/// One recorded step: the board after a move, and the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry<const N: usize = 3> {
    board: Board<N>,
    last_move: Option<Move>,
}

impl<const N: usize> HistoryEntry<N> {
    /// The step-0 entry: empty board, no move.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    pub(crate) fn after(board: Board<N>, last_move: Move) -> Self {
        Self {
            board,
            last_move: Some(last_move),
        }
    }

    /// Board as of this step.
    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    /// Move that produced this step; `None` for step 0.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board<N> {
        &mut self.board
    }
}

/// Move-list item handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveSummary {
    /// History index.
    pub step: usize,
    /// Move that produced this step; `None` for the game start.
    pub last_move: Option<Move>,
    /// True for the step currently on display.
    pub is_current: bool,
}

/// Lazy iterator over the move list.
///
/// Clone it to walk the same list again.
#[derive(Debug, Clone)]
pub struct HistorySummary<'a, const N: usize> {
    entries: std::iter::Enumerate<std::slice::Iter<'a, HistoryEntry<N>>>,
    current_step: usize,
}

impl<'a, const N: usize> HistorySummary<'a, N> {
    pub(crate) fn new(entries: &'a [HistoryEntry<N>], current_step: usize) -> Self {
        Self {
            entries: entries.iter().enumerate(),
            current_step,
        }
    }
}

impl<const N: usize> Iterator for HistorySummary<'_, N> {
    type Item = MoveSummary;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(step, entry)| MoveSummary {
            step,
            last_move: entry.last_move,
            is_current: step == self.current_step,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<const N: usize> ExactSizeIterator for HistorySummary<'_, N> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Coord, Player};

    fn sample() -> Vec<HistoryEntry<3>> {
        let mut board = Board::new();
        board.set(Coord::new(1, 1), Cell::X).unwrap();
        vec![
            HistoryEntry::initial(),
            HistoryEntry::after(board, Move::new(Coord::new(1, 1), Player::X)),
        ]
    }

    #[test]
    fn test_initial_entry() {
        let entry = HistoryEntry::<3>::initial();
        assert_eq!(entry.last_move(), None);
        assert_eq!(entry.board().filled_count(), 0);
    }

    #[test]
    fn test_summary_marks_current_step() {
        let entries = sample();
        let summary: Vec<_> = HistorySummary::new(&entries, 1).collect();
        assert_eq!(summary.len(), 2);
        assert!(!summary[0].is_current);
        assert!(summary[1].is_current);
        assert_eq!(summary[0].last_move, None);
        assert_eq!(summary[1].last_move.map(|m| m.coord), Some(Coord::new(1, 1)));
    }

    #[test]
    fn test_summary_is_restartable() {
        let entries = sample();
        let summary = HistorySummary::new(&entries, 0);
        assert_eq!(summary.len(), 2);
        let first_pass: Vec<_> = summary.clone().collect();
        let second_pass: Vec<_> = summary.collect();
        assert_eq!(first_pass, second_pass);
    }
}
