//! Error types for tic-tac-toe rules and moves.

use super::moves::Move;

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the move is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Move),

    /// The coordinates fall outside the 3x3 grid.
    #[display("Position ({}, {}) is off the board (rows and columns are 0-2)", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Error returned when a terminal-only query is made on a live board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StateError {
    /// The board is not terminal, so it has no outcome value yet.
    #[display("Board is not terminal")]
    NotTerminal,
}

impl std::error::Error for StateError {}

/// Error produced when reading a board from text or validating it.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Wrong number of cell symbols.
    #[display("Expected 9 cells, found {}", _0)]
    BadLength(usize),

    /// A symbol that is not a mark or an empty cell.
    #[display("Unknown cell symbol {:?}", _0)]
    BadSymbol(char),

    /// The board cannot arise from legal alternating play.
    #[display("Unreachable board: {}", _0)]
    Unreachable(String),
}

impl std::error::Error for BoardError {}
