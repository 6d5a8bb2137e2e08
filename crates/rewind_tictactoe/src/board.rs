//! N×N board storage.

use crate::error::GameError;
use crate::types::{Cell, Coord};
use serde::{Serialize, Serializer};

/// Square tic-tac-toe board of side `N`.
///
/// Cells are stored in row-major order. The side length is part of the
/// type, so every board in a game's history has the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board<const N: usize = 3> {
    cells: Vec<Cell>,
}

impl<const N: usize> Board<N> {
    const NON_EMPTY: () = assert!(N > 0, "board side must be at least 1");

    /// Creates an all-empty board.
    pub fn new() -> Self {
        let () = Self::NON_EMPTY;
        Self {
            cells: vec![Cell::Empty; N * N],
        }
    }

    /// Builds a board from explicit rows.
    pub fn from_rows(rows: [[Cell; N]; N]) -> Self {
        let () = Self::NON_EMPTY;
        Self {
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// Side length.
    pub const fn size(&self) -> usize {
        N
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < N && coord.col < N
    }

    /// Gets the cell at `coord`, or `None` when off the board.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        if self.contains(coord) {
            self.cells.get(coord.row * N + coord.col).copied()
        } else {
            None
        }
    }

    /// Checks if the cell at `coord` is on the board and unmarked.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Sets the cell at `coord`.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), GameError> {
        if !self.contains(coord) {
            return Err(GameError::OutOfBoundsCoordinate {
                row: coord.row,
                col: coord.col,
                size: N,
            });
        }
        self.cells[coord.row * N + coord.col] = cell;
        Ok(())
    }

    /// Number of marked cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(N)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Coordinates whose cells differ between two boards.
    pub fn diff(&self, other: &Self) -> Vec<Coord> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(idx, _)| Coord::new(idx / N, idx % N))
            .collect()
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Serialize for Board<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

impl<const N: usize> std::fmt::Display for Board<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, row) in self.rows().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::<3>::new();
        assert_eq!(board.filled_count(), 0);
        assert_eq!(board.cells().len(), 9);
        assert!(board.is_empty(Coord::new(1, 1)));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::<3>::new();
        assert_eq!(board.get(Coord::new(3, 0)), None);
        assert_eq!(board.get(Coord::new(0, 3)), None);
        assert!(!board.is_empty(Coord::new(5, 5)));
    }

    #[test]
    fn test_set_rejects_out_of_bounds() {
        let mut board = Board::<3>::new();
        let err = board.set(Coord::new(0, 3), Cell::X).unwrap_err();
        assert_eq!(
            err,
            GameError::OutOfBoundsCoordinate {
                row: 0,
                col: 3,
                size: 3
            }
        );
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_row_major_layout() {
        let mut board = Board::<4>::new();
        board.set(Coord::new(2, 1), Cell::O).unwrap();
        assert_eq!(board.cells()[2 * 4 + 1], Cell::O);
        assert_eq!(board.rows().nth(2).unwrap()[1], Cell::O);
    }

    #[test]
    fn test_from_rows_and_display() {
        use Cell::{Empty as E, O, X};
        let board = Board::from_rows([[X, O, E], [E, X, E], [E, E, O]]);
        assert_eq!(board.to_string(), "X O .\n. X .\n. . O");
        assert_eq!(board.filled_count(), 4);
    }

    #[test]
    fn test_diff_reports_changed_cells() {
        let before = Board::<3>::new();
        let mut after = before.clone();
        after.set(Coord::new(1, 2), Cell::X).unwrap();
        assert_eq!(before.diff(&after), vec![Coord::new(1, 2)]);
        assert!(after.diff(&after).is_empty());
    }

    #[test]
    fn test_serializes_as_rows() {
        let mut board = Board::<2>::new();
        board.set(Coord::new(0, 1), Cell::X).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"[["Empty","X"],["Empty","Empty"]]"#);
    }
}
