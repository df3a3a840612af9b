//! Random Move Policy
//!
//! Selects uniformly at random from the legal moves it is given. Useful for:
//! - Exercising the session controller end to end
//! - Baseline automated opponent (any real policy should easily beat this)
//! - Stress testing move generation in long self-play games

use chess_rules::{Move, MovePolicy, Position};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// A policy that plays random legal moves.
///
/// Provides no evaluation - it simply picks any member of the legal set,
/// which makes it the simplest possible automated mover.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPolicy;

impl RandomPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl MovePolicy for RandomPolicy {
    fn select_move(&self, _position: &Position, legal: &[Move]) -> Option<Move> {
        legal.choose(&mut thread_rng()).copied()
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
