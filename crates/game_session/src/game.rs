//! Game state management: authoritative history and terminal status.

use chess_rules::{apply_move, legal_moves, AppliedMove, Color, EngineError, Move, MoveRecord, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Terminal status of a game. `InProgress` is the only state from which
/// further moves may be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
    DrawByRepetition,
    DrawByFiftyMove,
    DrawByInsufficientMaterial,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// One applied ply: the position it produced and the record of the move
/// that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub position: Position,
    pub record: MoveRecord,
}

/// The authoritative game: initial position, applied plies, repetition
/// keys and the current terminal status.
///
/// Positions are stored per ply, so undo restores the exact prior value
/// (byte-equal FEN) rather than reconstructing it.
#[derive(Debug, Clone)]
pub struct GameState {
    initial: Position,
    position: Position,
    entries: Vec<HistoryEntry>,
    hashes: Vec<u64>,
    status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    /// Start from an arbitrary position, e.g. a practice setup. The status
    /// is evaluated immediately: a constructed position may already be
    /// stalemate or a material draw.
    pub fn from_position(position: Position) -> Self {
        let mut game = GameState {
            initial: position.clone(),
            hashes: vec![position.position_hash()],
            position,
            entries: Vec::new(),
            status: GameStatus::InProgress,
        };
        game.evaluate_status();
        game
    }

    pub fn from_fen(fen: &str) -> Result<Self, EngineError> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    /// Discard the history and return to this game's initial position.
    pub fn reset(&mut self) {
        *self = Self::from_position(self.initial.clone());
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.entries.last().map(|e| &e.record)
    }

    pub fn ply_count(&self) -> usize {
        self.entries.len()
    }

    pub fn in_check(&self) -> bool {
        self.position.in_check(self.position.side_to_move)
    }

    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.position)
    }

    pub fn legal_moves_from(&self, from: u8) -> Vec<Move> {
        chess_rules::legal_moves_from(&self.position, from)
    }

    /// Apply a move. The candidate is validated against the legal set by
    /// the rules engine; on any error the game is left untouched.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveRecord, EngineError> {
        if self.status.is_terminal() {
            warn!(status = ?self.status, "move rejected: game is over");
            return Err(EngineError::IllegalMove);
        }

        let AppliedMove { position, record } = apply_move(&self.position, mv)?;

        self.hashes.push(position.position_hash());
        self.entries.push(HistoryEntry {
            position: position.clone(),
            record: record.clone(),
        });
        self.position = position;
        self.evaluate_status();

        debug!(san = %record.san, fen = %self.position.to_fen(), "applied move");
        if self.status.is_terminal() {
            info!(status = ?self.status, plies = self.entries.len(), "game over");
        }
        Ok(record)
    }

    /// Remove the most recent ply and restore the prior position exactly.
    /// Undoing from a terminal status returns the game to whatever the
    /// prior status was.
    pub fn undo(&mut self) -> Result<(), EngineError> {
        if self.entries.pop().is_none() {
            return Err(EngineError::NoHistory);
        }
        self.hashes.pop();
        self.position = self
            .entries
            .last()
            .map(|e| e.position.clone())
            .unwrap_or_else(|| self.initial.clone());
        self.evaluate_status();
        debug!(fen = %self.position.to_fen(), "undid move");
        Ok(())
    }

    // Status is re-derived after every mutation. Mate and stalemate come
    // first: a mated side cannot claim the fifty-move rule.
    fn evaluate_status(&mut self) {
        let moves = legal_moves(&self.position);
        self.status = if moves.is_empty() {
            if self.position.in_check(self.position.side_to_move) {
                GameStatus::Checkmate {
                    winner: self.position.side_to_move.other(),
                }
            } else {
                GameStatus::Stalemate
            }
        } else if self.position.is_fifty_move_draw() {
            GameStatus::DrawByFiftyMove
        } else if self.is_threefold_repetition() {
            GameStatus::DrawByRepetition
        } else if self.position.is_insufficient_material() {
            GameStatus::DrawByInsufficientMaterial
        } else {
            GameStatus::InProgress
        };
    }

    // The current repetition key is the last pushed hash; three total
    // occurrences across the whole history make the draw.
    fn is_threefold_repetition(&self) -> bool {
        let current = self.position.position_hash();
        self.hashes.iter().filter(|&&h| h == current).count() >= 3
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
