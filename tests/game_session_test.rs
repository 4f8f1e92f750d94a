//! Tests for game sessions, players and orchestration.

use std::io::Cursor;
use strictly_minimax::{
    Board, Game, GameEvent, HumanPlayer, Mark, MinimaxPlayer, Move, MoveError, Orchestrator,
    Outcome, Player,
};

fn moves(indices: &[usize]) -> Vec<Move> {
    indices.iter().filter_map(|&i| Move::from_index(i)).collect()
}

#[test]
fn test_game_tracks_history_and_turns() {
    let mut game = Game::new();
    assert_eq!(game.to_move(), Mark::X);

    assert_eq!(game.play(Move::CENTER), Ok(Outcome::InProgress));
    assert_eq!(game.to_move(), Mark::O);
    assert_eq!(game.history(), &[Move::CENTER]);
    assert_eq!(game.legal_moves().len(), 8);
}

#[test]
fn test_failed_move_leaves_game_unchanged() {
    let mut game = Game::replay(&moves(&[4])).unwrap();
    let before = game.clone();

    assert_eq!(
        game.play(Move::CENTER),
        Err(MoveError::SquareOccupied(Move::CENTER))
    );
    assert_eq!(game, before);
}

#[test]
fn test_replay_reaches_the_same_board() {
    let game = Game::replay(&moves(&[0, 4, 8])).unwrap();
    let expected: Board = "X../.O./..X".parse().unwrap();
    assert_eq!(*game.board(), expected);
}

#[test]
fn test_replay_stops_at_game_over() {
    // X completes the top row on the fifth move; a sixth is rejected.
    assert_eq!(
        Game::replay(&moves(&[0, 3, 1, 4, 2, 5])),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_scripted_human_never_beats_minimax() {
    // Taken cells are refused, so the human always lands on the lowest
    // free cell.
    let script = "1\n2\n3\n4\n5\n6\n7\n8\n9\n";
    let human = HumanPlayer::new("Human", Cursor::new(script), Vec::new());
    let mut orchestrator = Orchestrator::new(
        Box::new(MinimaxPlayer::new("Minimax")),
        Box::new(human),
    );

    let mut names = Vec::new();
    let result = orchestrator.run(|event| {
        if let GameEvent::MoveMade { player, .. } = event {
            names.push(player.clone());
        }
    });

    let game = result.unwrap();
    assert_ne!(game.outcome(), Outcome::OWins);
    assert_eq!(names.first().map(String::as_str), Some("Minimax"));
}

#[test]
fn test_human_quit_stops_the_game() {
    let human = HumanPlayer::new("Human", Cursor::new("q\n"), Vec::new());
    let mut orchestrator = Orchestrator::new(
        Box::new(human),
        Box::new(MinimaxPlayer::new("Minimax")),
    );

    assert!(orchestrator.run(|_| {}).is_err());
    assert!(orchestrator.game().history().is_empty());
}

#[test]
fn test_selfplay_reports_every_move() {
    let mut orchestrator = Orchestrator::new(
        Box::new(MinimaxPlayer::new("X-bot")),
        Box::new(MinimaxPlayer::new("O-bot")),
    );

    let mut marks = Vec::new();
    let game = orchestrator
        .run(|event| {
            if let GameEvent::MoveMade { mark, .. } = event {
                marks.push(*mark);
            }
        })
        .unwrap();

    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(marks.len(), 9);
    assert!(marks.chunks(2).all(|pair| pair[0] == Mark::X));
}

#[test]
fn test_minimax_player_names() {
    let ai = MinimaxPlayer::new("Deep Blue");
    assert_eq!(ai.name(), "Deep Blue");
    assert_eq!(ai.assessment(), None);
}
