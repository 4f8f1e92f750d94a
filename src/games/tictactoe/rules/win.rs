//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player};
use tracing::instrument;

/// The eight winning lines as row-major board indices.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // Rows
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6], // Columns
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8], // Diagonals
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first complete line found, `None`
/// otherwise. Safe to call on any board.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Player> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Occupied(player) if cells[b] == cells[a] && cells[c] == cells[a] => Some(player),
        _ => None,
    })
}

/// Checks whether `player` has at least one complete line.
#[instrument(level = "trace")]
pub fn has_line(board: &Board, player: Player) -> bool {
    let cells = board.cells();
    let mark = Cell::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&index| cells[index] == mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_every_line() {
        for line in LINES {
            let mut symbols = ['.'; 9];
            for index in line {
                symbols[index] = 'O';
            }
            let board: Board = symbols.iter().collect::<String>().parse().unwrap();
            assert_eq!(winner(&board), Some(Player::O), "line {:?}", line);
        }
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "XXO/XO./O..".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./.O./...".parse().unwrap();
        assert_eq!(winner(&board), None);
        assert!(!has_line(&board, Player::X));
    }

    #[test]
    fn test_has_line_per_player() {
        let board: Board = "OOO/XXX/...".parse().unwrap();
        assert!(has_line(&board, Player::X));
        assert!(has_line(&board, Player::O));
    }
}
