//! Player trait and implementations.

mod human;
mod minimax;

pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;

use crate::games::tictactoe::{Game, Move};
use anyhow::Result;

/// Trait for players that can make moves.
pub trait Player {
    /// Chooses the next move for the side to move in `game`.
    ///
    /// The returned move must be one of `game.legal_moves()`.
    fn choose_move(&mut self, game: &Game) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Value of the position after this player's last move, if known.
    fn assessment(&self) -> Option<i8> {
        None
    }
}
