//! Strictly Minimax library - perfect tic-tac-toe play
//!
//! This library solves tic-tac-toe by exhaustive minimax search over the
//! full game tree.
//!
//! # Architecture
//!
//! - **Games**: Board rules, state transition and search (tic-tac-toe)
//! - **Players**: Human (line-oriented input) and minimax players
//! - **Orchestrator**: Turn loop between two players
//! - **Config**: TOML settings for interactive play
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Move, best_move};
//!
//! // X X _ / O O _ / _ _ _, X to move and win.
//! let board: Board = "XX./OO./...".parse()?;
//! assert_eq!(best_move(&board), Some(Move::new(0, 2)?));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod orchestrator;
mod players;

// Crate-level exports - Play configuration
pub use config::{ConfigError, PlayConfig};

// Crate-level exports - Orchestration
pub use orchestrator::{GameEvent, Orchestrator};

// Crate-level exports - Players
pub use players::{HumanPlayer, MinimaxPlayer, Player};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardError, BoardInvariants, Cell, Game, Invariant, InvariantSet, InvariantViolation,
    LINES, Mark, MarkBalanceInvariant, Move, MoveError, Outcome, SearchStats,
    SingleWinnerInvariant, Solution, StateError, WinnerMovedLastInvariant, apply_move,
    best_move, current_player, has_line, is_draw, is_full, is_terminal, legal_moves, outcome,
    outcome_value, search_with_stats, solve, value, winner,
};
