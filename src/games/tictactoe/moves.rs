//! Board coordinates for tic-tac-toe moves.

use super::error::MoveError;
use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: the (row, column) of the cell to mark.
///
/// Rows and columns run 0-2 from the top-left corner. A `Move` is always on
/// the board; whether it is legal depends on the board it is played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    row: u8,
    col: u8,
}

impl Move {
    /// All nine cells in row-major order.
    ///
    /// This is the enumeration order used everywhere moves are listed, which
    /// makes search tie-breaks reproducible.
    pub const ALL: [Move; 9] = [
        Move::at(0, 0),
        Move::at(0, 1),
        Move::at(0, 2),
        Move::at(1, 0),
        Move::at(1, 1),
        Move::at(1, 2),
        Move::at(2, 0),
        Move::at(2, 1),
        Move::at(2, 2),
    ];

    /// The center cell.
    pub const CENTER: Move = Move::at(1, 1);

    const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Creates a move, checking that both coordinates are in 0-2.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for coordinates off the board.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row < 3 && col < 3 {
            Ok(Self::at(row as u8, col as u8))
        } else {
            Err(MoveError::OutOfRange { row, col })
        }
    }

    /// Returns the row (0-2).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Returns the column (0-2).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Converts the move to its row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row() * 3 + self.col()
    }

    /// Creates a move from its row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get label for this cell (for display).
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 9] = [
            "Top-left",
            "Top-center",
            "Top-right",
            "Middle-left",
            "Center",
            "Middle-right",
            "Bottom-left",
            "Bottom-center",
            "Bottom-right",
        ];
        LABELS[self.index()]
    }

    /// Parses a move typed by a person.
    ///
    /// Accepts a keypad number `1`-`9` (matching [`Board::display`]), a
    /// `row,col` pair with 0-based coordinates, or a cell label such as
    /// `center` or `top-left`.
    #[instrument]
    pub fn parse(s: &str) -> Option<Move> {
        let s = s.trim();

        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        if let Some((row, col)) = s.split_once(',') {
            let row = row.trim().parse().ok()?;
            let col = col.trim().parse().ok()?;
            return Self::new(row, col).ok();
        }

        let s_lower = s.to_lowercase();
        if s_lower.is_empty() {
            return None;
        }
        Self::ALL
            .iter()
            .copied()
            .find(|mv| mv.label().to_lowercase() == s_lower)
    }

    /// Filters cells by board state, returning only the empty ones.
    ///
    /// Unlike [`legal_moves`](super::rules::legal_moves) this ignores whether
    /// the game has ended.
    #[instrument(level = "trace", skip(board))]
    pub fn empty_cells(board: &Board) -> Vec<Move> {
        Self::ALL
            .iter()
            .copied()
            .filter(|mv| board.is_empty(*mv))
            .collect()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
