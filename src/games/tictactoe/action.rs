//! State transition: playing one move on a board.
//!
//! Boards are never updated in place. Applying a move returns the
//! successor board and leaves the caller's board untouched.

use super::error::MoveError;
use super::moves::Move;
use super::rules;
use super::types::{Board, Cell};
use tracing::instrument;

/// Returns the board that results from the player to move marking `mv`.
///
/// # Errors
///
/// - [`MoveError::GameOver`] if the board is already terminal.
/// - [`MoveError::SquareOccupied`] if the cell at `mv` is taken.
#[instrument(level = "trace", skip(board, mv), fields(mv = %mv))]
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, MoveError> {
    if rules::is_terminal(board) {
        return Err(MoveError::GameOver);
    }

    if !board.is_empty(mv) {
        return Err(MoveError::SquareOccupied(mv));
    }

    Ok(successor(board, mv))
}

/// Marks `mv` for the player to move without checking legality.
///
/// Callers must take `mv` from [`rules::legal_moves`].
pub(crate) fn successor(board: &Board, mv: Move) -> Board {
    board.with(mv, Cell::Occupied(rules::current_player(board)))
}
