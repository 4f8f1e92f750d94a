//! Exhaustive minimax search for tic-tac-toe.
//!
//! X maximizes and O minimizes the value of a position, where a finished
//! game is worth 1 (X won), -1 (O won) or 0 (draw). The tree is small
//! enough to search to the end without pruning: from the empty board the
//! search visits 549,946 positions.
//!
//! Moves are tried in row-major order and a move replaces the current best
//! only when it is strictly better, so among equally good moves the first
//! in row-major order is returned.

use super::action::successor;
use super::moves::Move;
use super::rules;
use super::types::{Board, Outcome, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Counters collected while searching.
///
/// Purely diagnostic: the counters never influence the chosen move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    nodes: u64,
}

impl SearchStats {
    /// Number of positions evaluated, including the root.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn visit(&mut self) {
        self.nodes += 1;
    }
}

/// The result of solving a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Solution {
    /// Player to move in the solved position.
    to_move: Player,
    /// An optimal move for that player.
    best_move: Move,
    /// Value of the position under optimal play (X's perspective).
    value: i8,
    /// Positions evaluated to reach the answer.
    nodes: u64,
}

/// Returns an optimal move for the player to move, or `None` if the
/// game is over.
pub fn best_move(board: &Board) -> Option<Move> {
    solve(board).map(|solution| solution.best_move)
}

/// Solves the position: an optimal move, its value and the search size.
///
/// Returns `None` on a terminal board, where no move exists.
#[instrument(skip(board), fields(board = %board.encode()))]
pub fn solve(board: &Board) -> Option<Solution> {
    if rules::is_terminal(board) {
        debug!("Board is terminal, nothing to search");
        return None;
    }

    let mut stats = SearchStats::default();
    let to_move = rules::current_player(board);
    let (value, best_move) = search(board, to_move, &mut stats);
    let best_move = best_move?;

    debug!(
        player = %to_move,
        best_move = %best_move,
        value,
        nodes = stats.nodes(),
        "Search complete"
    );

    Some(Solution {
        to_move,
        best_move,
        value,
        nodes: stats.nodes(),
    })
}

/// Returns the minimax value of any board from X's perspective.
///
/// Terminal boards evaluate to their outcome value.
#[instrument(skip(board), fields(board = %board.encode()))]
pub fn value(board: &Board) -> i8 {
    let mut stats = SearchStats::default();
    search(board, rules::current_player(board), &mut stats).0
}

/// Searches `board`, counting visited positions in `stats`.
///
/// Exposed for callers that want node counts across several searches.
pub fn search_with_stats(board: &Board, stats: &mut SearchStats) -> (i8, Option<Move>) {
    search(board, rules::current_player(board), stats)
}

fn search(board: &Board, to_move: Player, stats: &mut SearchStats) -> (i8, Option<Move>) {
    match to_move {
        Player::X => max_value(board, stats),
        Player::O => min_value(board, stats),
    }
}

/// Best value X can force, and the first move achieving it.
fn max_value(board: &Board, stats: &mut SearchStats) -> (i8, Option<Move>) {
    stats.visit();
    if let Some(value) = terminal_value(board) {
        return (value, None);
    }

    let mut best_value = i8::MIN;
    let mut best_move = None;
    for mv in rules::legal_moves(board) {
        let (value, _) = min_value(&successor(board, mv), stats);
        if value > best_value {
            best_value = value;
            best_move = Some(mv);
        }
    }
    (best_value, best_move)
}

/// Best value O can force, and the first move achieving it.
fn min_value(board: &Board, stats: &mut SearchStats) -> (i8, Option<Move>) {
    stats.visit();
    if let Some(value) = terminal_value(board) {
        return (value, None);
    }

    let mut best_value = i8::MAX;
    let mut best_move = None;
    for mv in rules::legal_moves(board) {
        let (value, _) = max_value(&successor(board, mv), stats);
        if value < best_value {
            best_value = value;
            best_move = Some(mv);
        }
    }
    (best_value, best_move)
}

fn terminal_value(board: &Board) -> Option<i8> {
    match rules::outcome(board) {
        Outcome::InProgress => None,
        finished => finished.value(),
    }
}
