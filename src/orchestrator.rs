//! Game orchestration between players.

use crate::games::tictactoe::{Board, Game, Mark, Move, Outcome};
use crate::players::Player;
use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

/// Notifications emitted while a game is played.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A player is about to choose a move.
    Thinking {
        /// Display name of the player.
        player: String,
        /// Mark the player is playing.
        mark: Mark,
    },
    /// A move was made.
    MoveMade {
        /// Display name of the player.
        player: String,
        /// Mark that was placed.
        mark: Mark,
        /// Cell that was marked.
        mv: Move,
        /// Board after the move.
        board: Board,
        /// The mover's own evaluation of the result, when it has one.
        value: Option<i8>,
    },
    /// Game ended.
    GameOver {
        /// Final outcome.
        outcome: Outcome,
        /// Display name of the winner, if any.
        winner: Option<String>,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates a new orchestrator with X to move on an empty board.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self {
            game: Game::new(),
            player_x,
            player_o,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the game loop until the game ends.
    ///
    /// `on_event` sees every [`GameEvent`] in order. Returns the finished
    /// game.
    ///
    /// # Errors
    ///
    /// Fails if a player cannot produce a move or produces an illegal one.
    #[instrument(skip(self, on_event), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self, mut on_event: impl FnMut(&GameEvent)) -> Result<Game> {
        info!("Starting game orchestration");

        while !self.game.is_over() {
            let mark = self.game.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let name = player.name().to_string();

            on_event(&GameEvent::Thinking {
                player: name.clone(),
                mark,
            });

            debug!(player = %name, %mark, "Waiting for move");
            let mv = player.choose_move(&self.game)?;
            let value = player.assessment();

            self.game
                .play(mv)
                .with_context(|| format!("{} played an illegal move {}", name, mv))?;

            on_event(&GameEvent::MoveMade {
                player: name,
                mark,
                mv,
                board: *self.game.board(),
                value,
            });
        }

        let outcome = self.game.outcome();
        let winner = outcome.winner().map(|mark| match mark {
            Mark::X => self.player_x.name().to_string(),
            Mark::O => self.player_o.name().to_string(),
        });
        info!(%outcome, winner = ?winner, moves = self.game.history().len(), "Game over");
        on_event(&GameEvent::GameOver { outcome, winner });

        Ok(self.game.clone())
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        self.game = Game::new();
    }
}
