//! A game in progress: the current board plus the moves that built it.

use super::action::apply_move;
use super::error::MoveError;
use super::moves::Move;
use super::rules;
use super::types::{Board, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tic-tac-toe game session.
///
/// Each call to [`Game::play`] swaps in the successor board produced by
/// [`apply_move`]; earlier boards are never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game on an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a game by playing `moves` in order from the empty board.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] met while replaying.
    #[instrument(skip(moves), fields(len = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for mv in moves {
            game.play(*mv)?;
        }
        Ok(game)
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        rules::current_player(&self.board)
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        rules::is_terminal(&self.board)
    }

    /// Returns the legal moves in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        rules::legal_moves(&self.board)
    }

    /// Plays `mv` for the player to move and returns the new outcome.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the game is over or the cell is taken; the
    /// game is unchanged in that case.
    #[instrument(skip(self, mv), fields(mv = %mv, player = %self.to_move()))]
    pub fn play(&mut self, mv: Move) -> Result<Outcome, MoveError> {
        self.board = apply_move(&self.board, mv)?;
        self.history.push(mv);

        let outcome = self.outcome();
        debug!(%outcome, ply = self.history.len(), "Move applied");
        Ok(outcome)
    }
}
