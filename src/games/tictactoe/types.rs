//! Core domain types for tic-tac-toe.

use super::error::BoardError;
use super::moves::Move;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the symbol drawn for this player's mark.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns the player whose mark is in this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every transformation produces a new board and
/// two boards with the same cells are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given move's coordinates.
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.index()]
    }

    /// Checks if the cell at `mv` is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Counts the marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Returns a copy of this board with `cell` written at `mv`.
    pub(crate) fn with(&self, mv: Move, cell: Cell) -> Self {
        let mut next = *self;
        next.cells[mv.index()] = cell;
        next
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their keypad number (1-9).
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    Cell::Occupied(player) => player.symbol().to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }

    /// Encodes the board as nine symbols (`X`, `O`, `.`), the format
    /// accepted by [`Board::from_str`].
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.mark().map_or('.', Player::symbol))
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses nine cell symbols in row-major order.
    ///
    /// `X`/`O` (either case) are marks; `.`, `_` and `-` are empty cells.
    /// Whitespace and `/` may separate rows and are ignored.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if symbols.len() != 9 {
            return Err(BoardError::BadLength(symbols.len()));
        }

        let mut cells = [Cell::Empty; 9];
        for (cell, symbol) in cells.iter_mut().zip(symbols) {
            *cell = match symbol {
                'x' | 'X' => Cell::Occupied(Player::X),
                'o' | 'O' => Cell::Occupied(Player::O),
                '.' | '_' | '-' => Cell::Empty,
                other => return Err(BoardError::BadSymbol(other)),
            };
        }
        Ok(Self { cells })
    }
}

/// Status of a board, derived only from its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Outcome {
    /// X completed a line.
    #[strum(to_string = "X wins")]
    XWins,
    /// O completed a line.
    #[strum(to_string = "O wins")]
    OWins,
    /// Board is full with no line.
    #[strum(to_string = "Draw")]
    Draw,
    /// Game is ongoing.
    #[strum(to_string = "In progress")]
    InProgress,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }

    /// Value from X's perspective: 1, -1 or 0, or `None` while in progress.
    pub fn value(self) -> Option<i8> {
        match self {
            Outcome::XWins => Some(1),
            Outcome::OWins => Some(-1),
            Outcome::Draw => Some(0),
            Outcome::InProgress => None,
        }
    }
}

impl From<Player> for Outcome {
    fn from(winner: Player) -> Self {
        match winner {
            Player::X => Outcome::XWins,
            Player::O => Outcome::OWins,
        }
    }
}
