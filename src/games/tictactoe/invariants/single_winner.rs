//! Single winner invariant: at most one player has three in a row.

use super::super::rules::has_line;
use super::super::{Board, Player};
use super::Invariant;

/// Invariant: X and O do not both have a completed line.
///
/// The game stops at the first completed line, so a board with lines for
/// both players cannot be reached.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        !(has_line(board, Player::X) && has_line(board, Player::O))
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}
