//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. They know nothing about
//! history or turn order, so the engine can evaluate any recorded step.

pub mod tie;
pub mod win;

pub use tie::is_full;
pub use win::{CANONICAL_LINES, detect_win, winner, winning_lines};
pub(crate) use win::line_owner;
