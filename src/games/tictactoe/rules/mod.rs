//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search and the game session share one definition.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, has_line, winner};

use super::error::StateError;
use super::moves::Move;
use super::types::{Board, Outcome, Player};
use tracing::instrument;

/// Returns the player whose turn it is.
///
/// X moves when both players have placed the same number of marks,
/// otherwise O. The answer is meaningless on a terminal board.
#[instrument(level = "trace")]
pub fn current_player(board: &Board) -> Player {
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Returns every legal move in row-major order.
///
/// A terminal board has no legal moves, even if empty cells remain.
#[instrument(level = "trace")]
pub fn legal_moves(board: &Board) -> Vec<Move> {
    if is_terminal(board) {
        return Vec::new();
    }
    Move::empty_cells(board)
}

/// Returns true if someone has won or the board is full.
#[instrument(level = "trace")]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Returns the status of the board.
#[instrument(level = "trace")]
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(player) => Outcome::from(player),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

/// Returns the value of a finished game from X's perspective.
///
/// 1 if X won, -1 if O won, 0 for a draw.
///
/// # Errors
///
/// Returns [`StateError::NotTerminal`] if the game is still in progress.
#[instrument(level = "trace")]
pub fn outcome_value(board: &Board) -> Result<i8, StateError> {
    outcome(board).value().ok_or(StateError::NotTerminal)
}
