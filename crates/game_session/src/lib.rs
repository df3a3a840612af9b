//! Game session layer for the chess rules engine.
//!
//! This crate owns the mutable side of a game: the move history, terminal
//! status evaluation, undo, and the turn sequencing between human callers
//! and injected automated policies. All rules questions are answered by
//! `chess_rules`; everything here funnels mutation through
//! [`GameState::apply_move`] and [`GameState::undo`].

mod game;
mod session;

pub use game::*;
pub use session::*;
