use super::*;
use crate::types::{Move, PieceKind};

#[test]
fn test_piece_keys_are_nonzero_and_distinct() {
    let white_pawn = Piece {
        color: Color::White,
        kind: PieceKind::Pawn,
    };
    let black_pawn = Piece {
        color: Color::Black,
        kind: PieceKind::Pawn,
    };
    assert_ne!(ZOBRIST.piece_key(white_pawn, 0), 0);
    assert_ne!(
        ZOBRIST.piece_key(white_pawn, 0),
        ZOBRIST.piece_key(white_pawn, 1)
    );
    assert_ne!(
        ZOBRIST.piece_key(white_pawn, 0),
        ZOBRIST.piece_key(black_pawn, 0)
    );
}

#[test]
fn test_side_to_move_changes_hash() {
    let w = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
        .expect("valid fen");
    let b = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1")
        .expect("valid fen");
    assert_ne!(w.position_hash(), b.position_hash());
}

#[test]
fn test_castling_rights_change_hash() {
    let all = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
        .expect("valid fen");
    let none = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1")
        .expect("valid fen");
    assert_ne!(all.position_hash(), none.position_hash());
}

#[test]
fn test_en_passant_target_changes_hash() {
    let with_ep =
        Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
            .expect("valid fen");
    let without =
        Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1")
            .expect("valid fen");
    assert_ne!(with_ep.position_hash(), without.position_hash());
}

#[test]
fn test_clocks_do_not_affect_hash() {
    let a = Position::from_fen("8/8/8/4k3/8/4K3/8/8 w - - 0 1").expect("valid fen");
    let b = Position::from_fen("8/8/8/4k3/8/4K3/8/8 w - - 55 80").expect("valid fen");
    assert_eq!(a.position_hash(), b.position_hash());
}

#[test]
fn test_make_unmake_restores_hash() {
    let mut pos = Position::startpos();
    let before = pos.position_hash();
    let mv = Move::new(12, 28);
    let undo = pos.make_move(mv);
    assert_ne!(pos.position_hash(), before);
    pos.unmake_move(mv, undo);
    assert_eq!(pos.position_hash(), before);
}
