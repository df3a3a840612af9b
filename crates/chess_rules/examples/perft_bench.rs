//! Perft driver for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo run --release --example perft_bench -p chess_rules -- [depth] [fen]

use chess_rules::{Position, perft};
use std::env;
use std::time::Instant;

const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
    ),
    ("Position 3", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"),
    (
        "Position 5",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ -",
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(5);

    let positions: Vec<(String, String)> = match args.get(2) {
        Some(fen) => vec![("Custom position".to_string(), fen.clone())],
        None => TEST_POSITIONS
            .iter()
            .map(|(n, f)| (n.to_string(), f.to_string()))
            .collect(),
    };

    println!("=== Perft ===");
    println!("Depth: {depth}");
    println!();

    for (name, fen) in positions {
        let mut pos = match Position::from_fen(&fen) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };

        let start = Instant::now();
        let nodes = perft(&mut pos, depth);
        let elapsed = start.elapsed();

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!("{name:.<30} {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }
}
