//! Computer player backed by exhaustive minimax search.

use super::Player;
use crate::games::tictactoe::{Game, Move, Solution, solve};
use anyhow::{Result, anyhow};
use tracing::{debug, info, instrument};

/// Computer player that always plays an optimal move.
pub struct MinimaxPlayer {
    name: String,
    last: Option<Solution>,
}

impl MinimaxPlayer {
    /// Creates a new minimax player.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last: None,
        }
    }

    /// Returns the solution behind the most recent move.
    pub fn last_solution(&self) -> Option<&Solution> {
        self.last.as_ref()
    }
}

impl Player for MinimaxPlayer {
    #[instrument(skip(self, game), fields(ai = %self.name))]
    fn choose_move(&mut self, game: &Game) -> Result<Move> {
        debug!("AI making move");

        let solution = solve(game.board()).ok_or_else(|| anyhow!("No valid moves available"))?;
        info!(
            best_move = %solution.best_move(),
            value = solution.value(),
            nodes = solution.nodes(),
            "AI chose move"
        );

        self.last = Some(solution);
        Ok(*solution.best_move())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn assessment(&self) -> Option<i8> {
        self.last.map(|solution| *solution.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plays_winning_move_and_reports_value() {
        // X X _ / O O _ / _ _ _, X to move.
        let moves: Vec<Move> = [0, 3, 1, 4]
            .iter()
            .filter_map(|&i| Move::from_index(i))
            .collect();
        let game = Game::replay(&moves).unwrap();

        let mut ai = MinimaxPlayer::new("AI");
        assert_eq!(ai.assessment(), None);
        let mv = ai.choose_move(&game).unwrap();

        assert_eq!(mv, Move::new(0, 2).unwrap());
        assert_eq!(ai.assessment(), Some(1));
        assert_eq!(ai.last_solution().map(|s| *s.best_move()), Some(mv));
    }

    #[test]
    fn test_finished_game_is_an_error() {
        let moves: Vec<Move> = [0, 3, 1, 4, 2]
            .iter()
            .filter_map(|&i| Move::from_index(i))
            .collect();
        let game = Game::replay(&moves).unwrap();
        assert!(MinimaxPlayer::new("AI").choose_move(&game).is_err());
    }
}
