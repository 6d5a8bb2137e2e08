//! Full-board detection.

use crate::board::Board;
use tracing::instrument;

/// Checks if every cell is marked.
///
/// A full board with no detected line is a tie.
#[instrument(skip(board))]
pub fn is_full<const N: usize>(board: &Board<N>) -> bool {
    board.filled_count() == N * N
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::win::detect_win;
    use crate::types::Cell::{self, Empty as E, O, X};

    fn is_tie<const N: usize>(board: &Board<N>) -> bool {
        is_full(board) && detect_win(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::<3>::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_rows([[X; 3]; 3]);
        assert!(is_full(&board));
    }

    #[test]
    fn test_tie_detection() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert!(is_tie(&board));
    }

    #[test]
    fn test_not_tie_if_winner() {
        let board: Board<3> = Board::from_rows([[X, X, X], [O, O, X], [O, X, O]]);
        assert!(is_full(&board));
        assert!(!is_tie(&board));
    }

    #[test]
    fn test_single_cell_board() {
        assert!(!is_full(&Board::<1>::new()));
        assert!(is_full(&Board::from_rows([[Cell::O]])));
    }
}
