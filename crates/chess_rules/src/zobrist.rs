//! Zobrist keys for position hashing.
//!
//! The repetition rule compares positions by piece placement, side to
//! move, castling rights and en-passant target, with the move counters
//! excluded. A 64-bit XOR hash over fixed random keys captures exactly
//! that tuple, so the session layer can keep a plain `Vec<u64>` history
//! and count occurrences. The hash is recomputed per position; at one
//! position per ply there is nothing to gain from incremental updates.

use crate::board::Position;
use crate::types::{Color, Piece};

/// Pre-computed random values, generated at compile time from a fixed
/// seed so hashes are stable across runs and builds.
pub struct ZobristKeys {
    /// Indexed by [color][piece_kind][square].
    pub pieces: [[[u64; 64]; 6]; 2],
    /// XOR-ed in when black is to move.
    pub side_to_move: u64,
    /// One key per right: [wk, wq, bk, bq].
    pub castling: [u64; 4],
    /// One key per en-passant file.
    pub en_passant: [u64; 8],
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristKeys {
    pub const fn new() -> Self {
        // xorshift64: fast, reproducible, good enough spread for 781 keys.
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x5851F42D4C957F2Du64; // fixed seed

        let mut pieces = [[[0u64; 64]; 6]; 2];
        let mut color = 0;
        while color < 2 {
            let mut piece = 0;
            while piece < 6 {
                let mut sq = 0;
                while sq < 64 {
                    state = xorshift64(state);
                    pieces[color][piece][sq] = state;
                    sq += 1;
                }
                piece += 1;
            }
            color += 1;
        }

        state = xorshift64(state);
        let side_to_move = state;

        let mut castling = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            state = xorshift64(state);
            castling[i] = state;
            i += 1;
        }

        let mut en_passant = [0u64; 8];
        let mut i = 0;
        while i < 8 {
            state = xorshift64(state);
            en_passant[i] = state;
            i += 1;
        }

        ZobristKeys {
            pieces,
            side_to_move,
            castling,
            en_passant,
        }
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: u8) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][sq as usize]
    }
}

/// Global static keys, computed at compile time.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

impl Position {
    /// Repetition key: hashes placement, side to move, castling rights and
    /// the en-passant file. Clocks are deliberately excluded.
    pub fn position_hash(&self) -> u64 {
        let mut h = 0u64;
        for sq in 0..64u8 {
            if let Some(pc) = self.piece_at(sq) {
                h ^= ZOBRIST.piece_key(pc, sq);
            }
        }
        if self.side_to_move == Color::Black {
            h ^= ZOBRIST.side_to_move;
        }
        let rights = [
            self.castling.wk,
            self.castling.wq,
            self.castling.bk,
            self.castling.bq,
        ];
        for (i, set) in rights.into_iter().enumerate() {
            if set {
                h ^= ZOBRIST.castling[i];
            }
        }
        if let Some(ep) = self.en_passant {
            h ^= ZOBRIST.en_passant[(ep % 8) as usize];
        }
        h
    }
}

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
