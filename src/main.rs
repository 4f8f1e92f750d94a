//! Strictly Minimax - Unified CLI
//!
//! Plays tic-tac-toe perfectly, solves positions, and runs self-play.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use strictly_minimax::{
    Board, GameEvent, HumanPlayer, Mark, MinimaxPlayer, Move, Orchestrator, Outcome, PlayConfig,
    Player, outcome, solve,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            human,
            config,
            show_values,
        } => run_play(human, config, show_values),
        Command::Solve { board, json } => run_solve(&board, json),
        Command::Selfplay { json } => run_selfplay(json),
    }
}

/// Play a human on stdin against the computer
#[instrument]
fn run_play(human: Option<Mark>, config: Option<PathBuf>, show_values: bool) -> Result<()> {
    let mut config = match config {
        Some(path) => PlayConfig::from_file(path)?,
        None => PlayConfig::default(),
    };
    if let Some(mark) = human {
        config = config.with_human_mark(mark);
    }
    if show_values {
        config = config.with_show_values(true);
    }

    info!(human_mark = %config.human_mark(), "Starting interactive game");

    let person: Box<dyn Player> = Box::new(HumanPlayer::new(
        config.human_name().clone(),
        io::stdin().lock(),
        io::stdout(),
    ));
    let computer: Box<dyn Player> = Box::new(MinimaxPlayer::new(config.ai_name().clone()));
    let (player_x, player_o) = match config.human_mark() {
        Mark::X => (person, computer),
        Mark::O => (computer, person),
    };

    println!("{}\n", Board::new());

    let ai_name = config.ai_name().clone();
    let show_values = *config.show_values();
    let mut orchestrator = Orchestrator::new(player_x, player_o);
    orchestrator.run(|event| match event {
        GameEvent::Thinking { player, .. } if *player == ai_name => {
            println!("{} is thinking...", player);
        }
        GameEvent::Thinking { .. } => {}
        GameEvent::MoveMade {
            player,
            mark,
            mv,
            board,
            value,
        } => {
            println!("{} ({}) plays {}\n\n{}\n", player, mark, mv.label(), board);
            if let (true, Some(value)) = (show_values, value) {
                println!("{} evaluates the position: {}\n", player, describe_value(*value));
            }
        }
        GameEvent::GameOver { outcome, winner } => match winner {
            Some(name) => println!("Game over: {} ({})", name, outcome),
            None => println!("Game over: {}", outcome),
        },
    })?;

    Ok(())
}

/// Result of solving a single position
#[derive(Debug, Serialize)]
struct SolveReport {
    board: String,
    outcome: Outcome,
    to_move: Option<Mark>,
    best_move: Option<Move>,
    value: i8,
    nodes: u64,
}

/// Solve a position given on the command line
#[instrument]
fn run_solve(text: &str, json: bool) -> Result<()> {
    let board: Board = text
        .parse()
        .with_context(|| format!("Invalid board {:?}", text))?;
    board.validate()?;

    let status = outcome(&board);
    let report = match solve(&board) {
        Some(solution) => SolveReport {
            board: board.encode(),
            outcome: status,
            to_move: Some(*solution.to_move()),
            best_move: Some(*solution.best_move()),
            value: *solution.value(),
            nodes: *solution.nodes(),
        },
        None => SolveReport {
            board: board.encode(),
            outcome: status,
            to_move: None,
            best_move: None,
            value: status.value().unwrap_or_default(),
            nodes: 0,
        },
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}\n", board);
    match (report.to_move, report.best_move) {
        (Some(mark), Some(mv)) => {
            println!("{} to move. Best move: {} {}", mark, mv.label(), mv);
            println!("Value: {} ({})", report.value, describe_value(report.value));
            println!("Positions searched: {}", report.nodes);
        }
        _ => println!("Game over: {}", report.outcome),
    }
    Ok(())
}

/// Let the computer play itself
#[instrument]
fn run_selfplay(json: bool) -> Result<()> {
    let mut orchestrator = Orchestrator::new(
        Box::new(MinimaxPlayer::new("Minimax X")),
        Box::new(MinimaxPlayer::new("Minimax O")),
    );

    let game = orchestrator.run(|event| {
        if json {
            return;
        }
        match event {
            GameEvent::MoveMade {
                player, mv, board, ..
            } => println!("{} plays {}\n\n{}\n", player, mv.label(), board),
            GameEvent::GameOver { outcome, .. } => println!("Game over: {}", outcome),
            GameEvent::Thinking { .. } => {}
        }
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&game)?);
    }
    Ok(())
}

fn describe_value(value: i8) -> &'static str {
    match value.signum() {
        1 => "X can force a win",
        -1 => "O can force a win",
        _ => "draw with best play",
    }
}
