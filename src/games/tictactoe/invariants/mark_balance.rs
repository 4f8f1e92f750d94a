//! Mark balance invariant: X moves first and players alternate.

use super::super::{Board, Player};
use super::Invariant;

/// Invariant: X has as many marks as O, or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "Players alternate with X first (X count equals O count or is one more)"
    }
}
