//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_minimax::Mark;

/// Strictly Minimax - tic-tac-toe that never loses
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Optimal tic-tac-toe by exhaustive minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer in the terminal
    Play {
        /// Mark to play (x moves first); overrides the config file
        #[arg(long)]
        human: Option<Mark>,

        /// Path to a TOML play config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the computer's evaluation after each of its moves
        #[arg(long)]
        show_values: bool,
    },

    /// Find the best move for a position
    Solve {
        /// Board as nine cells in row-major order: X, O and . for empty
        /// (rows may be separated by /), e.g. "XO./.X./..."
        board: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the computer play both sides
    Selfplay {
        /// Print the finished game as JSON
        #[arg(long)]
        json: bool,
    },
}
