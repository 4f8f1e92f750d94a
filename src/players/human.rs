//! Human player reading moves from a text stream.

use super::Player;
use crate::games::tictactoe::{Game, Move};
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Human player using line-based input.
///
/// Generic over its streams so the same code reads a terminal or a test
/// script.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Returns the output stream, consuming the player.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip(self, game), fields(player = %self.name))]
    fn choose_move(&mut self, game: &Game) -> Result<Move> {
        let legal = game.legal_moves();
        if legal.is_empty() {
            bail!("No legal moves available");
        }

        loop {
            write!(
                self.output,
                "{} ({}) move [1-9, row,col or name, q to quit]: ",
                self.name,
                game.to_move()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                bail!("Input closed");
            }

            let text = line.trim();
            if text.eq_ignore_ascii_case("q") || text.eq_ignore_ascii_case("quit") {
                bail!("{} quit the game", self.name);
            }

            match Move::parse(text) {
                Some(mv) if legal.contains(&mv) => {
                    debug!(mv = %mv, "Human chose move");
                    return Ok(mv);
                }
                Some(mv) => writeln!(self.output, "{} is already taken.", mv.label())?,
                None => writeln!(self.output, "Could not read {:?} as a move.", text)?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
