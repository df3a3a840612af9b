//! Legal move generation.
//!
//! Two stages: pseudo-legal generation per piece kind, then a check-safety
//! filter that plays each candidate on a scratch position and discards any
//! that leave the mover's own king attacked. Castling and en-passant
//! legality are handled at generation time. The returned order is
//! unspecified; callers needing an order sort themselves.

use crate::{board::Position, types::*};

const PROMO_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the position only once.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Legal moves originating from one square only.
pub fn legal_moves_from(pos: &Position, from: u8) -> Vec<Move> {
    let mut moves = legal_moves(pos);
    moves.retain(|mv| mv.from == from);
    moves
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move;
    // Filter illegal moves in-place by playing them on the mutable position.
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let illegal = pos.in_check(mover);
        pos.unmake_move(mv, undo);
        !illegal
    });
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    for from in 0..64u8 {
        let pc = match pos.piece_at(from) {
            Some(p) => p,
            None => continue,
        };
        if pc.color != pos.side_to_move {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, from, pc.color, out),
            PieceKind::Knight => gen_knight(pos, from, pc.color, out),
            PieceKind::Bishop => gen_slider(
                pos,
                from,
                pc.color,
                out,
                &[(1, 1), (1, -1), (-1, 1), (-1, -1)],
            ),
            PieceKind::Rook => gen_slider(
                pos,
                from,
                pc.color,
                out,
                &[(1, 0), (-1, 0), (0, 1), (0, -1)],
            ),
            PieceKind::Queen => gen_slider(
                pos,
                from,
                pc.color,
                out,
                &[
                    (1, 1),
                    (1, -1),
                    (-1, 1),
                    (-1, -1),
                    (1, 0),
                    (-1, 0),
                    (0, 1),
                    (0, -1),
                ],
            ),
            PieceKind::King => {
                gen_king(pos, from, pc.color, out);
                gen_castle(pos, from, pc.color, out);
            }
        }
    }
}

// Pushes either the single quiet/capture move or, on the last rank, all
// four promotion choices.
fn push_pawn_move(from: u8, to: u8, promo_rank: i8, out: &mut Vec<Move>) {
    if rank_of(to) == promo_rank {
        for pk in PROMO_KINDS {
            out.push(Move::promotion(from, to, pk));
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);

    let (dir, start_rank, promo_rank): (i8, i8, i8) = match c {
        Color::White => (1, 1, 7),
        Color::Black => (-1, 6, 0),
    };

    // Forward one, forward two from the start rank.
    if let Some(to) = sq(f, r + dir)
        && pos.piece_at(to).is_none()
    {
        push_pawn_move(from, to, promo_rank, out);

        if r == start_rank
            && let Some(to2) = sq(f, r + 2 * dir)
            && pos.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2));
        }
    }

    // Diagonal captures, including the en-passant target square.
    for df in [-1, 1] {
        if let Some(to) = sq(f + df, r + dir) {
            if let Some(tpc) = pos.piece_at(to) {
                if tpc.color != c {
                    push_pawn_move(from, to, promo_rank, out);
                }
            } else if pos.en_passant == Some(to) {
                out.push(Move::en_passant(from, to));
            }
        }
    }
}

fn gen_knight(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let deltas = [
        (1, 2),
        (2, 1),
        (-1, 2),
        (-2, 1),
        (1, -2),
        (2, -1),
        (-1, -2),
        (-2, -1),
    ];
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn gen_slider(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            f += df;
            r += dr;
        }
    }
}

fn gen_king(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let deltas = [
        (1, 1),
        (1, 0),
        (1, -1),
        (0, 1),
        (0, -1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
    ];
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn gen_castle(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    // Must be on the original king square with some right remaining.
    let (king_from, kingside, queenside) = match c {
        Color::White => (4u8, pos.castling.wk, pos.castling.wq),
        Color::Black => (60u8, pos.castling.bk, pos.castling.bq),
    };
    if from != king_from {
        return;
    }

    // Castling out of check is never legal.
    if pos.in_check(c) {
        return;
    }

    let enemy = c.other();
    let base = king_from; // e1 or e8

    // King side: two empty squares, neither attacked on the king's path.
    if kingside
        && pos.piece_at(base + 1).is_none()
        && pos.piece_at(base + 2).is_none()
        && !pos.is_square_attacked(base + 1, enemy)
        && !pos.is_square_attacked(base + 2, enemy)
    {
        out.push(Move::castle(base, base + 2));
    }

    // Queen side: three empty squares, the king crosses only two of them.
    if queenside
        && pos.piece_at(base - 1).is_none()
        && pos.piece_at(base - 2).is_none()
        && pos.piece_at(base - 3).is_none()
        && !pos.is_square_attacked(base - 1, enemy)
        && !pos.is_square_attacked(base - 2, enemy)
    {
        out.push(Move::castle(base, base - 2));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
