//! Winner-moved-last invariant: the game ends on the winning move.

use super::super::rules::has_line;
use super::super::{Board, Player};
use super::Invariant;

/// Invariant: a completed line belongs to the player who moved last.
///
/// If X has a line, X made the last move (one more mark than O). If O has
/// a line, O made the last move (equal counts).
pub struct WinnerMovedLastInvariant;

impl Invariant<Board> for WinnerMovedLastInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);

        if has_line(board, Player::X) && x != o + 1 {
            return false;
        }
        if has_line(board, Player::O) && x != o {
            return false;
        }
        true
    }

    fn description() -> &'static str {
        "The winner made the last move"
    }
}
