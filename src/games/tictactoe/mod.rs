//! Tic-tac-toe: rules, move application and minimax search.

mod action;
mod error;
mod game;
mod invariants;
mod minimax;
mod moves;
mod rules;
mod types;

pub use action::apply_move;
pub use error::{BoardError, MoveError, StateError};
pub use game::Game;
pub use invariants::{
    BoardInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    SingleWinnerInvariant, WinnerMovedLastInvariant,
};
pub use minimax::{SearchStats, Solution, best_move, search_with_stats, solve, value};
pub use moves::Move;
pub use rules::{
    LINES, current_player, has_line, is_draw, is_full, is_terminal, legal_moves, outcome,
    outcome_value, winner,
};
pub use types::{Board, Cell, Outcome, Player};

/// Alias for clarity where "player" means a seat at the table.
pub type Mark = Player;
