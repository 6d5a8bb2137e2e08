//! Win detection for tic-tac-toe.

use crate::board::Board;
use crate::status::WinLine;
use crate::types::{Coord, Player};
use tracing::instrument;

/// Winning lines of the 3×3 board in scan order.
///
/// Rows top to bottom, columns left to right, then the main diagonal and
/// the anti-diagonal. When several lines are complete, the first one here
/// is reported.
pub const CANONICAL_LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Generates every winning line of an N×N board in scan order.
///
/// The order matches [`CANONICAL_LINES`] for N = 3.
pub fn winning_lines<const N: usize>() -> impl Iterator<Item = WinLine> + Clone {
    let rows = (0..N).map(|r| WinLine::new((0..N).map(|c| Coord::new(r, c)).collect()));
    let cols = (0..N).map(|c| WinLine::new((0..N).map(|r| Coord::new(r, c)).collect()));
    let diagonals = [false, true].into_iter().map(|anti| {
        WinLine::new(
            (0..N)
                .map(|i| Coord::new(i, if anti { N - 1 - i } else { i }))
                .collect(),
        )
    });
    rows.chain(cols).chain(diagonals)
}

/// Returns the first complete line on the board, if any.
///
/// A line is complete when all of its cells hold the same mark. Safe on
/// any board; an empty board yields `None`.
#[instrument(skip(board))]
pub fn detect_win<const N: usize>(board: &Board<N>) -> Option<WinLine> {
    winning_lines::<N>().find(|line| {
        let mut cells = line.cells().iter().map(|coord| board.get(*coord));
        match cells.next() {
            Some(Some(first)) if !first.is_empty() => cells.all(|cell| cell == Some(first)),
            _ => false,
        }
    })
}

/// Owner of the first complete line, if any.
#[instrument(skip(board))]
pub fn winner<const N: usize>(board: &Board<N>) -> Option<Player> {
    line_owner(board, &detect_win(board)?)
}

/// Player whose marks fill `line`, read from its first cell.
pub(crate) fn line_owner<const N: usize>(board: &Board<N>, line: &WinLine) -> Option<Player> {
    let first = line.cells().first()?;
    board.get(*first).and_then(|cell| cell.player())
}
