//! The validated move applier.
//!
//! `apply_move` is the only way consumers transition a position: it
//! resolves the candidate against the legal-move set, plays it on a copy,
//! and returns the successor together with display metadata (SAN, check
//! flag, captured piece). The input position is never mutated.

use crate::{
    board::Position,
    error::EngineError,
    movegen::legal_moves,
    san,
    types::*,
};

/// Display metadata for one applied move.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    pub mv: Move,
    pub san: String,
    pub gives_check: bool,
    pub captured: Option<Piece>,
}

/// Successor position plus the record of the move that produced it.
#[derive(Clone, Debug)]
pub struct AppliedMove {
    pub position: Position,
    pub record: MoveRecord,
}

// A pawn move onto the last rank with no promotion choice means queen.
// This is the documented default, matching what a bare from/to move entry
// (a board UI drag, say) is taken to mean.
fn normalize_promotion(pos: &Position, mut mv: Move) -> Move {
    if mv.promo.is_none()
        && let Some(pc) = pos.piece_at(mv.from)
        && pc.kind == PieceKind::Pawn
    {
        let promo_rank = match pc.color {
            Color::White => 7,
            Color::Black => 0,
        };
        if rank_of(mv.to) == promo_rank {
            mv.promo = Some(PieceKind::Queen);
        }
    }
    mv
}

/// Apply `mv` to `pos`, producing the successor position and move record.
///
/// The candidate is matched against the legal set by origin, destination
/// and promotion choice, so callers that only know from/to squares get the
/// correct castle and en-passant flags attached for them. Anything that
/// does not resolve to a legal move is rejected with
/// [`EngineError::IllegalMove`].
pub fn apply_move(pos: &Position, mv: Move) -> Result<AppliedMove, EngineError> {
    let mv = normalize_promotion(pos, mv);
    let legal = legal_moves(pos);
    let mv = legal
        .iter()
        .copied()
        .find(|m| m.from == mv.from && m.to == mv.to && m.promo == mv.promo)
        .ok_or(EngineError::IllegalMove)?;

    let base = san::san_base(pos, mv, &legal);

    let mut next = pos.clone();
    let undo = next.make_move(mv);
    let captured = undo.captured;

    let gives_check = next.in_check(next.side_to_move);
    let san = if gives_check {
        let mate = legal_moves(&next).is_empty();
        format!("{base}{}", if mate { '#' } else { '+' })
    } else {
        base
    };

    Ok(AppliedMove {
        position: next,
        record: MoveRecord {
            mv,
            san,
            gives_check,
            captured,
        },
    })
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod apply_tests;
