//! Text rendering of boards, status and move lists.

use crate::config::DisplayConfig;
use rewind_tictactoe::{Board, Cell, GameEngine, GameError, GameStatus, MoveSummary, WinLine};
use serde::Serialize;
use tracing::instrument;

/// Draws the board with row and column labels.
///
/// Cells on `highlight` are bracketed, e.g. `[X]`.
pub fn render_board<const N: usize>(
    board: &Board<N>,
    highlight: Option<&WinLine>,
    display: &DisplayConfig,
) -> String {
    let offset = display.index_offset();
    let label_width = (N - 1 + offset).to_string().len();

    let header: String = (0..N).map(|col| format!(" {} ", col + offset)).collect();
    let mut lines = vec![format!("{}{}", " ".repeat(label_width), header)
        .trim_end()
        .to_string()];

    for (row, cells) in board.rows().enumerate() {
        let body: String = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let symbol = match cell {
                    Cell::Empty => display.empty_symbol().clone(),
                    marked => marked.symbol().to_string(),
                };
                let on_line = *display.highlight_winner()
                    && highlight.is_some_and(|line| line.contains((row, col).into()));
                if on_line {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        lines.push(
            format!("{:>width$}{}", row + offset, body, width = label_width)
                .trim_end()
                .to_string(),
        );
    }
    lines.join("\n")
}

/// Labels one move-list item the way the move buttons read.
///
/// The current step is marked with `>`.
pub fn move_label(item: &MoveSummary, display: &DisplayConfig) -> String {
    let offset = display.index_offset();
    let marker = if item.is_current { '>' } else { ' ' };
    match item.last_move {
        None => format!("{} {}. Go to game start", marker, item.step),
        Some(mv) => format!(
            "{} {}. Go to move #{} | row:{}, col:{}",
            marker,
            item.step,
            item.step,
            mv.coord.row + offset,
            mv.coord.col + offset
        ),
    }
}

/// Renders the whole move list, one line per recorded step.
pub fn render_history<const N: usize>(game: &GameEngine<N>, display: &DisplayConfig) -> String {
    game.history_summary()
        .map(|item| move_label(&item, display))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Board, status and (optionally) move list for the selected step.
#[instrument(skip(game, display), fields(step = game.current_step()))]
pub fn render_game<const N: usize>(game: &GameEngine<N>, display: &DisplayConfig) -> String {
    let status = game.status();
    let mut out = render_board(game.current_board(), status.winning_line(), display);
    out.push_str("\n\n");
    out.push_str(&status.to_string());
    if *display.show_history() {
        out.push_str("\n\n");
        out.push_str(&render_history(game, display));
    }
    out
}

/// Explains a rejected intent in the numbering the user typed.
///
/// Coordinates in `GameError` are board indices; they are shifted by the
/// display offset. Other rejections read the same in either numbering.
pub fn describe_rejection(err: &GameError, display: &DisplayConfig) -> String {
    let offset = display.index_offset();
    match *err {
        GameError::OutOfBoundsCoordinate { row, col, size } => format!(
            "Coordinate ({}, {}) is outside the {}x{} board",
            row + offset,
            col + offset,
            size,
            size
        ),
        GameError::CellOccupied { row, col } => format!(
            "Cell ({}, {}) is already occupied",
            row + offset,
            col + offset
        ),
        GameError::GameAlreadyOver | GameError::InvalidHistoryStep { .. } => err.to_string(),
    }
}

/// Serializable view of the selected step, for `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a, const N: usize> {
    /// Board side length.
    pub size: usize,
    /// Selected step.
    pub current_step: usize,
    /// Derived status.
    pub status: GameStatus,
    /// Human-readable status line.
    pub status_text: String,
    /// Board at the selected step.
    pub board: &'a Board<N>,
    /// Move list.
    pub history: Vec<MoveSummary>,
}

impl<'a, const N: usize> Snapshot<'a, N> {
    /// Captures the engine's selected step.
    pub fn of(game: &'a GameEngine<N>) -> Self {
        let status = game.status();
        Self {
            size: N,
            current_step: game.current_step(),
            status_text: status.to_string(),
            status,
            board: game.current_board(),
            history: game.history_summary().collect(),
        }
    }
}
