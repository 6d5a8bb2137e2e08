//! Pure N×N tic-tac-toe game logic with move history and time travel.
//!
//! The engine owns the full list of boards a game has passed through.
//! Callers submit move intents `(row, col)` and jump intents `(step)`;
//! everything a presentation layer needs (visible board, status, winning
//! line, move list) is derived from the selected step.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{ClassicGame, GameStatus, Player};
//!
//! let mut game = ClassicGame::new();
//! game.apply_move(1, 1)?;
//! game.apply_move(0, 0)?;
//! game.jump_to(1)?;
//! assert_eq!(game.next_player(), Player::O);
//!
//! // Moving now discards the rewound step.
//! game.apply_move(2, 2)?;
//! assert_eq!(game.history_len(), 3);
//! assert!(matches!(game.status(), GameStatus::InProgress { .. }));
//! # Ok::<(), rewind_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod error;
mod history;
mod status;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use board::Board;
pub use engine::{ClassicGame, GameEngine};
pub use error::GameError;
pub use history::{HistoryEntry, HistorySummary, MoveSummary};
pub use rules::{CANONICAL_LINES, detect_win, winning_lines};
pub use status::{GameStatus, WinLine};
pub use types::{Cell, Coord, Move, Player};
