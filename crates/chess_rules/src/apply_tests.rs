use super::*;
use crate::board::Position;

#[test]
fn test_illegal_move_is_rejected() {
    let pos = Position::startpos();
    let result = apply_move(&pos, Move::new(12, 36)); // e2-e5
    assert!(matches!(result, Err(EngineError::IllegalMove)));
}

#[test]
fn test_input_position_is_not_mutated() {
    let pos = Position::startpos();
    apply_move(&pos, Move::new(12, 28)).expect("legal move");
    assert_eq!(pos, Position::startpos());
}

#[test]
fn test_promotion_defaults_to_queen() {
    let pos = Position::from_fen("3k4/4P3/8/8/8/8/8/4K3 w - - 0 1").expect("valid fen");
    let applied = apply_move(&pos, Move::new(52, 60)).expect("legal move");
    let promoted = applied.position.piece_at(60).expect("piece on e8");
    assert_eq!(promoted.kind, PieceKind::Queen);
    assert_eq!(promoted.color, Color::White);
}

#[test]
fn test_underpromotion_is_honored() {
    let pos = Position::from_fen("3k4/4P3/8/8/8/8/8/4K3 w - - 0 1").expect("valid fen");
    let applied =
        apply_move(&pos, Move::promotion(52, 60, PieceKind::Knight)).expect("legal move");
    let promoted = applied.position.piece_at(60).expect("piece on e8");
    assert_eq!(promoted.kind, PieceKind::Knight);
    assert_eq!(applied.record.san, "e8=N");
}

#[test]
fn test_en_passant_removes_the_passed_pawn() {
    let fen = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3";
    let pos = Position::from_fen(fen).expect("valid fen");
    // Bare from/to input: the applier attaches the en-passant flag itself
    let applied = apply_move(&pos, Move::new(36, 43)).expect("legal move");
    assert!(applied.record.mv.is_en_passant);
    assert!(applied.position.piece_at(35).is_none(), "d5 pawn captured");
    assert_eq!(
        applied.record.captured,
        Some(Piece {
            color: Color::Black,
            kind: PieceKind::Pawn
        })
    );
    assert_eq!(applied.position.en_passant, None);
}

#[test]
fn test_castling_moves_the_rook() {
    let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
    let pos = Position::from_fen(fen).expect("valid fen");
    let applied = apply_move(&pos, Move::new(4, 6)).expect("legal move");
    assert!(applied.record.mv.is_castle);
    let rook = applied.position.piece_at(5).expect("rook on f1");
    assert_eq!(rook.kind, PieceKind::Rook);
    assert!(applied.position.piece_at(7).is_none());
    assert!(!applied.position.castling.wk);
    assert!(!applied.position.castling.wq);
    assert!(applied.position.castling.bk);
    assert!(applied.position.castling.bq);
}

#[test]
fn test_capturing_a_rook_clears_its_castling_right() {
    let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
    let pos = Position::from_fen(fen).expect("valid fen");
    let applied = apply_move(&pos, Move::new(7, 63)).expect("legal move"); // Rxh8
    assert!(!applied.position.castling.wk, "h1 rook left home");
    assert!(!applied.position.castling.bk, "h8 rook was captured");
    assert!(applied.position.castling.wq);
    assert!(applied.position.castling.bq);
}

#[test]
fn test_move_counters() {
    let pos = Position::startpos();
    let applied = apply_move(&pos, Move::new(6, 21)).expect("legal move"); // Nf3
    assert_eq!(applied.position.halfmove_clock, 1);
    assert_eq!(applied.position.fullmove_number, 1);
    assert_eq!(applied.position.side_to_move, Color::Black);

    let applied = apply_move(&applied.position, Move::new(62, 45)).expect("legal move"); // Nf6
    assert_eq!(applied.position.halfmove_clock, 2);
    assert_eq!(applied.position.fullmove_number, 2);

    // A pawn move resets the clock
    let applied = apply_move(&applied.position, Move::new(12, 28)).expect("legal move"); // e4
    assert_eq!(applied.position.halfmove_clock, 0);
}
