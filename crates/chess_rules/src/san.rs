//! Standard algebraic notation for applied moves.
//!
//! The check and mate suffixes depend on the successor position, so the
//! applier assembles the final string: `san_base` here produces everything
//! up to the optional `+`/`#`.

use crate::{board::Position, types::*};

fn kind_letter(kind: PieceKind) -> char {
    match kind {
        PieceKind::Pawn => 'P', // never printed; pawns use their file
        PieceKind::Knight => 'N',
        PieceKind::Bishop => 'B',
        PieceKind::Rook => 'R',
        PieceKind::Queen => 'Q',
        PieceKind::King => 'K',
    }
}

/// Minimal disambiguation among same-kind pieces that can also reach the
/// destination: file if it suffices, else rank, else both.
fn disambiguation(pos: &Position, mv: Move, kind: PieceKind, legal: &[Move]) -> String {
    let rivals: Vec<u8> = legal
        .iter()
        .filter(|m| m.to == mv.to && m.from != mv.from)
        .filter(|m| pos.piece_at(m.from).is_some_and(|p| p.kind == kind))
        .map(|m| m.from)
        .collect();
    if rivals.is_empty() {
        return String::new();
    }

    let file = file_of(mv.from);
    let rank = rank_of(mv.from);
    let file_ch = (b'a' + file as u8) as char;
    let rank_ch = (b'1' + rank as u8) as char;

    if rivals.iter().all(|&s| file_of(s) != file) {
        file_ch.to_string()
    } else if rivals.iter().all(|&s| rank_of(s) != rank) {
        rank_ch.to_string()
    } else {
        format!("{file_ch}{rank_ch}")
    }
}

/// SAN without the check/mate suffix. `legal` is the legal-move set of
/// `pos`, passed in so disambiguation does not regenerate it.
pub(crate) fn san_base(pos: &Position, mv: Move, legal: &[Move]) -> String {
    let piece = match pos.piece_at(mv.from) {
        Some(p) => p,
        // Fall back to coordinate text rather than invent notation.
        None => return format!("{}{}", sq_to_coord(mv.from), sq_to_coord(mv.to)),
    };

    if mv.is_castle {
        return if mv.to > mv.from { "O-O" } else { "O-O-O" }.to_string();
    }

    let mut san = String::new();
    let is_capture = pos.piece_at(mv.to).is_some() || mv.is_en_passant;

    match piece.kind {
        PieceKind::Pawn => {
            if is_capture {
                san.push((b'a' + mv.from % 8) as char);
            }
        }
        kind => {
            san.push(kind_letter(kind));
            if kind != PieceKind::King {
                san.push_str(&disambiguation(pos, mv, kind, legal));
            }
        }
    }

    if is_capture {
        san.push('x');
    }
    san.push_str(&sq_to_coord(mv.to));

    if let Some(promo) = mv.promo {
        san.push('=');
        san.push(kind_letter(promo));
    }

    san
}

#[cfg(test)]
#[path = "san_tests.rs"]
mod san_tests;
