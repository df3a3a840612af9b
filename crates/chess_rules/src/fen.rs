//! Forsyth-Edwards Notation: the textual position encoding used by the
//! session API and the test fixtures.
//!
//! Six space-separated fields: placement (rank 8 down to 1), side to move,
//! castling rights, en-passant target, halfmove clock, fullmove number.
//! `from_fen` accepts four-field strings and defaults the clocks, which is
//! how most published test positions are written. Round-trip holds for
//! every position this engine can reach: `from_fen(&p.to_fen()) == p`.

use crate::board::{CastlingRights, Position};
use crate::error::EngineError;
use crate::types::*;

fn piece_from_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(Piece { color, kind })
}

fn piece_to_char(pc: Piece) -> char {
    let ch = match pc.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match pc.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}

impl Position {
    /// Parse a FEN string. Rejects anything that violates the grammar or
    /// the one-king-per-side invariant; on error the caller keeps whatever
    /// position it already had.
    pub fn from_fen(fen: &str) -> Result<Self, EngineError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(EngineError::malformed("expected at least 4 FEN fields"));
        }

        let mut board = [None; 64];
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(EngineError::malformed("placement must list 8 ranks"));
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file: i8 = 0;
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 first
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let pc = piece_from_char(ch).ok_or_else(|| {
                        EngineError::malformed(format!("invalid piece char '{ch}'"))
                    })?;
                    let s = sq(file, rank).ok_or_else(|| {
                        EngineError::malformed(format!("rank {} overflows 8 files", rank + 1))
                    })?;
                    board[s as usize] = Some(pc);
                    file += 1;
                }
                if file > 8 {
                    return Err(EngineError::malformed(format!(
                        "rank {} overflows 8 files",
                        rank + 1
                    )));
                }
            }
            if file != 8 {
                return Err(EngineError::malformed(format!(
                    "rank {} covers fewer than 8 files",
                    rank + 1
                )));
            }
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(EngineError::malformed(format!(
                    "invalid side to move '{other}'"
                )));
            }
        };

        let mut castling = CastlingRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => {
                        return Err(EngineError::malformed(format!(
                            "invalid castling char '{c}'"
                        )));
                    }
                }
            }
        }

        let en_passant = if parts[3] == "-" {
            None
        } else {
            Some(coord_to_sq(parts[3]).ok_or_else(|| {
                EngineError::malformed(format!("invalid en-passant square '{}'", parts[3]))
            })?)
        };

        let halfmove_clock: u32 = parts
            .get(4)
            .copied()
            .unwrap_or("0")
            .parse()
            .map_err(|_| EngineError::malformed("invalid halfmove clock"))?;
        let fullmove_number: u32 = parts
            .get(5)
            .copied()
            .unwrap_or("1")
            .parse()
            .map_err(|_| EngineError::malformed("invalid fullmove number"))?;

        let pos = Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        };

        for color in [Color::White, Color::Black] {
            let kings = pos
                .board
                .iter()
                .flatten()
                .filter(|pc| pc.color == color && pc.kind == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(EngineError::malformed(format!(
                    "{color:?} must have exactly one king, found {kings}"
                )));
            }
        }

        Ok(pos)
    }

    /// Serialize to canonical six-field FEN.
    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(80);

        for rank in (0..8).rev() {
            let mut empties = 0;
            for file in 0..8 {
                let s = (rank * 8 + file) as u8;
                match self.piece_at(s) {
                    Some(pc) => {
                        if empties > 0 {
                            out.push(char::from_digit(empties, 10).unwrap_or('0'));
                            empties = 0;
                        }
                        out.push(piece_to_char(pc));
                    }
                    None => empties += 1,
                }
            }
            if empties > 0 {
                out.push(char::from_digit(empties, 10).unwrap_or('0'));
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        if self.castling == CastlingRights::none() {
            out.push('-');
        } else {
            if self.castling.wk {
                out.push('K');
            }
            if self.castling.wq {
                out.push('Q');
            }
            if self.castling.bk {
                out.push('k');
            }
            if self.castling.bq {
                out.push('q');
            }
        }

        out.push(' ');
        match self.en_passant {
            Some(s) => out.push_str(&sq_to_coord(s)),
            None => out.push('-'),
        }

        out.push(' ');
        out.push_str(&self.halfmove_clock.to_string());
        out.push(' ');
        out.push_str(&self.fullmove_number.to_string());

        out
    }
}

// Positions cross serialization boundaries as FEN text rather than as a
// 64-slot structure dump.
#[cfg(feature = "serde")]
impl serde::Serialize for Position {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_fen())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Position {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fen: String = serde::Deserialize::deserialize(deserializer)?;
        Position::from_fen(&fen).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
