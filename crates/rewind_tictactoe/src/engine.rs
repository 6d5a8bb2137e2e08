//! History-tracking game engine.
//!
//! The engine records every board the game has passed through and lets the
//! caller select any of them. Everything else (the visible board, whose turn
//! it is, the status) is derived from the selected step on demand.

use crate::board::Board;
use crate::contracts::{Contract, MoveContract};
use crate::error::GameError;
use crate::history::{HistoryEntry, HistorySummary};
use crate::rules::{detect_win, is_full, line_owner};
use crate::status::{GameStatus, WinLine};
use crate::types::{Coord, Move, Player};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Tic-tac-toe engine on an N×N board with time travel.
///
/// Moving after a rewind discards every step beyond the selected one
/// (branch-on-write). Rejected intents leave the engine untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameEngine<const N: usize = 3> {
    history: Vec<HistoryEntry<N>>,
    current_step: usize,
}

/// Engine on the classic 3×3 board.
pub type ClassicGame = GameEngine<3>;

impl<const N: usize> GameEngine<N> {
    /// Creates a game holding only the empty step-0 board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            current_step: 0,
        }
    }

    /// Plays `moves` in order from a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the first rejection encountered.
    #[instrument(skip(moves))]
    pub fn replay(moves: impl IntoIterator<Item = (usize, usize)>) -> Result<Self, GameError> {
        let mut game = Self::new();
        for (row, col) in moves {
            game.apply_move(row, col)?;
        }
        Ok(game)
    }

    /// Places the next player's mark at `(row, col)`.
    ///
    /// Any steps after the selected one are discarded before the new entry
    /// is appended; the new entry becomes the selected step.
    ///
    /// # Errors
    ///
    /// - `OutOfBoundsCoordinate` if `row` or `col` is not below `N`
    /// - `GameAlreadyOver` if the selected step is won
    /// - `CellOccupied` if the cell is marked at the selected step
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameStatus, GameError> {
        let coord = Coord::new(row, col);
        if let Err(err) = MoveContract::pre(self, &coord) {
            warn!(%err, "Move rejected");
            return Err(err);
        }

        let before = cfg!(debug_assertions).then(|| self.clone());

        let player = self.next_player();
        let mut board = self.current_board().clone();
        board.set(coord, player.cell())?;

        let discarded = self.history.len() - (self.current_step + 1);
        self.history.truncate(self.current_step + 1);
        self.history.push(HistoryEntry::after(board, Move::new(coord, player)));
        self.current_step = self.history.len() - 1;

        debug!(%player, %coord, discarded, step = self.current_step, "Move applied");

        if let Some(before) = before {
            let post = MoveContract::post(&before, self);
            debug_assert!(post.is_ok(), "{:?}", post);
        }

        Ok(self.status())
    }

    /// Selects a recorded step without touching history.
    ///
    /// Out-of-range steps are rejected rather than clamped.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHistoryStep` if `step >= history_len()`.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        if step >= self.history.len() {
            let err = GameError::InvalidHistoryStep {
                step,
                len: self.history.len(),
            };
            warn!(%err, "Jump rejected");
            return Err(err);
        }
        self.current_step = step;
        debug!(step, next_player = %self.next_player(), "Jumped");
        Ok(())
    }

    /// Derives the status of the selected step.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(line) = detect_win(board) {
            if let Some(winner) = line_owner(board, &line) {
                return GameStatus::Won { winner, line };
            }
        }
        if is_full(board) {
            GameStatus::Tied
        } else {
            GameStatus::InProgress {
                next_player: self.next_player(),
            }
        }
    }

    /// Winning line at the selected step, for highlighting.
    pub fn winning_line(&self) -> Option<WinLine> {
        detect_win(self.current_board())
    }

    /// Move list: one item per recorded step, with the selected one flagged.
    pub fn history_summary(&self) -> HistorySummary<'_, N> {
        HistorySummary::new(&self.history, self.current_step)
    }

    /// Board at the selected step.
    pub fn current_board(&self) -> &Board<N> {
        self.history[self.current_step].board()
    }

    /// Selected step.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Player to move at the selected step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Move that produced the selected step.
    pub fn last_move(&self) -> Option<Move> {
        self.history[self.current_step].last_move()
    }

    /// Number of recorded steps, including the empty start.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// All recorded steps.
    pub fn history(&self) -> &[HistoryEntry<N>] {
        &self.history
    }

    /// Board side length.
    pub const fn size(&self) -> usize {
        N
    }

    #[cfg(test)]
    pub(crate) fn history_mut(&mut self) -> &mut Vec<HistoryEntry<N>> {
        &mut self.history
    }
}

impl<const N: usize> Default for GameEngine<N> {
    fn default() -> Self {
        Self::new()
    }
}
