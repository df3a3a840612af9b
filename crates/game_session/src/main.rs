//! Session CLI
//!
//! Plays an automated game (random policy on both sides) through the
//! session controller and prints the move list, the result and a JSON
//! summary. Doubles as an end-to-end exercise of the whole stack.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use chess_rules::MovePolicy;
use game_session::{GameMode, GameStatus, SessionController};
use random_policy::RandomPolicy;
use serde::Serialize;

#[derive(Serialize)]
struct GameSummary {
    result: GameStatus,
    plies: usize,
    moves: Vec<String>,
    final_fen: String,
}

fn print_usage() {
    println!("Session CLI - random self-play through the session controller");
    println!();
    println!("Usage:");
    println!("  session_cli [--fen FEN] [--max-plies N]");
}

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut fen: Option<String> = None;
    let mut max_plies: usize = 400;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--fen" | "-f" => {
                if i + 1 < args.len() {
                    fen = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--max-plies" | "-m" => {
                if i + 1 < args.len() {
                    max_plies = args[i + 1].parse().unwrap_or(400);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => {}
        }
        i += 1;
    }

    let session = match &fen {
        Some(f) => match SessionController::from_fen(f, GameMode::AutoVsAuto) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => SessionController::new(GameMode::AutoVsAuto),
    };
    let policy = RandomPolicy::new();
    let mut session = session
        .with_policy(Arc::new(policy))
        .with_policy_budget(Duration::from_secs(5));

    println!("=== Self-play: {} on both sides ===", policy.name());

    while session.history().len() < max_plies && !session.current_status().is_terminal() {
        if let Err(e) = session.request_automated_move() {
            eprintln!("Move failed: {e}");
            break;
        }
    }

    let moves: Vec<String> = session
        .history()
        .iter()
        .map(|e| e.record.san.clone())
        .collect();
    for (i, pair) in moves.chunks(2).enumerate() {
        match pair {
            [w, b] => println!("{}. {} {}", i + 1, w, b),
            [w] => println!("{}. {}", i + 1, w),
            _ => {}
        }
    }
    println!();
    println!("Result: {:?} after {} plies", session.current_status(), moves.len());

    let summary = GameSummary {
        result: session.current_status(),
        plies: moves.len(),
        moves,
        final_fen: session.to_fen(),
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Failed to serialize summary: {e}"),
    }
}
