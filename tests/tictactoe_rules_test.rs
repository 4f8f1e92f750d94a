//! Tests for tic-tac-toe board rules and state transition.

use strictly_minimax::{
    Board, BoardError, Cell, Mark, Move, MoveError, Outcome, StateError, apply_move,
    current_player, is_terminal, legal_moves, outcome, outcome_value, winner,
};

fn board(s: &str) -> Board {
    s.parse().expect("test board should parse")
}

fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col).expect("test move should be in range")
}

#[test]
fn test_empty_board_x_to_move() {
    let empty = Board::new();
    assert_eq!(current_player(&empty), Mark::X);
    assert_eq!(winner(&empty), None);
    assert!(!is_terminal(&empty));
    assert_eq!(legal_moves(&empty), Move::ALL.to_vec());
}

#[test]
fn test_top_row_x_wins() {
    let top_row = board("XXX/.../...");
    assert_eq!(winner(&top_row), Some(Mark::X));
    assert!(is_terminal(&top_row));
    assert_eq!(outcome_value(&top_row), Ok(1));
    assert!(legal_moves(&top_row).is_empty());
}

#[test]
fn test_full_board_without_line_is_draw() {
    let full = board("XOX/XOO/OXX");
    assert_eq!(winner(&full), None);
    assert!(is_terminal(&full));
    assert_eq!(outcome(&full), Outcome::Draw);
    assert_eq!(outcome_value(&full), Ok(0));
}

#[test]
fn test_o_win_scores_minus_one() {
    let column = board("XOX/XO./.O.");
    assert_eq!(winner(&column), Some(Mark::O));
    assert_eq!(outcome_value(&column), Ok(-1));
}

#[test]
fn test_outcome_value_of_live_board_is_an_error() {
    assert_eq!(
        outcome_value(&board("X../.O./...")),
        Err(StateError::NotTerminal)
    );
}

#[test]
fn test_occupied_cell_is_rejected() {
    let start = board("X../.../...");
    assert_eq!(
        apply_move(&start, mv(0, 0)),
        Err(MoveError::SquareOccupied(mv(0, 0)))
    );
}

#[test]
fn test_move_after_game_over_is_rejected() {
    let won = board("XXX/OO./...");
    assert_eq!(apply_move(&won, mv(2, 2)), Err(MoveError::GameOver));
}

#[test]
fn test_out_of_range_move_is_rejected() {
    assert_eq!(Move::new(3, 0), Err(MoveError::OutOfRange { row: 3, col: 0 }));
    assert!(Move::new(0, 3).is_err());
}

#[test]
fn test_players_alternate_from_x() {
    let mut current = Board::new();
    for (turn, next) in Move::ALL.iter().enumerate() {
        if is_terminal(&current) {
            break;
        }
        let expected = if turn % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(current_player(&current), expected);

        current = apply_move(&current, *next).unwrap();
        assert_eq!(current.get(*next), Cell::Occupied(expected));
    }
}

#[test]
fn test_apply_move_leaves_input_unchanged() {
    let before = board("X../.O./...");
    let copy = before;
    let after = apply_move(&before, mv(2, 2)).unwrap();

    assert_eq!(before, copy);
    assert_ne!(before, after);
    assert_eq!(after.get(mv(2, 2)), Cell::Occupied(Mark::X));
}

#[test]
fn test_legal_moves_are_exactly_the_empty_cells() {
    let mid_game = board("XO./.X./O..");
    let legal = legal_moves(&mid_game);

    assert_eq!(legal, vec![mv(0, 2), mv(1, 0), mv(1, 2), mv(2, 1), mv(2, 2)]);
    for cell in Move::ALL {
        assert_eq!(legal.contains(&cell), mid_game.is_empty(cell));
    }
}

#[test]
fn test_boards_compare_by_cells() {
    let a = apply_move(&apply_move(&Board::new(), mv(0, 0)).unwrap(), mv(1, 1)).unwrap();
    let b = board("X../.O./...");
    assert_eq!(a, b);
    assert_eq!(a.encode(), "X...O....");
}

#[test]
fn test_parse_rejects_bad_boards() {
    assert_eq!("XO".parse::<Board>(), Err(BoardError::BadLength(2)));
    assert_eq!("XO?/.../...".parse::<Board>(), Err(BoardError::BadSymbol('?')));
}

#[test]
fn test_validate_rejects_unreachable_boards() {
    assert!(board("XO./.../...").validate().is_ok());
    assert!(matches!(
        board("XXX/X../...").validate(),
        Err(BoardError::Unreachable(_))
    ));
    assert!(matches!(
        board("XXX/OOO/...").validate(),
        Err(BoardError::Unreachable(_))
    ));
}

#[test]
fn test_move_parse_accepts_all_forms() {
    assert_eq!(Move::parse("5"), Some(Move::CENTER));
    assert_eq!(Move::parse("2, 0"), Some(mv(2, 0)));
    assert_eq!(Move::parse("top-left"), Some(mv(0, 0)));
    assert_eq!(Move::parse("0"), None);
    assert_eq!(Move::parse("3,3"), None);
}
