use crate::board::Position;
use crate::error::EngineError;

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[test]
fn test_startpos_serializes_to_standard_fen() {
    assert_eq!(Position::startpos().to_fen(), STARTPOS_FEN);
}

#[test]
fn test_round_trip_startpos() {
    let parsed = Position::from_fen(STARTPOS_FEN).expect("valid fen");
    assert_eq!(parsed, Position::startpos());
    assert_eq!(parsed.to_fen(), STARTPOS_FEN);
}

#[test]
fn test_round_trip_kiwipete() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    let pos = Position::from_fen(fen).expect("valid fen");
    assert_eq!(pos.to_fen(), fen);
    assert_eq!(Position::from_fen(&pos.to_fen()).expect("valid fen"), pos);
}

#[test]
fn test_round_trip_with_en_passant_target() {
    let mut pos = Position::startpos();
    pos.make_move(crate::types::Move::new(12, 28)); // e2-e4
    let fen = pos.to_fen();
    assert_eq!(
        fen,
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
    assert_eq!(Position::from_fen(&fen).expect("valid fen"), pos);
}

#[test]
fn test_four_field_fen_defaults_clocks() {
    let pos = Position::from_fen("8/8/8/4k3/8/4K3/8/8 w - -").expect("valid fen");
    assert_eq!(pos.halfmove_clock, 0);
    assert_eq!(pos.fullmove_number, 1);
}

#[test]
fn test_malformed_fens_are_rejected() {
    let bad = [
        "",
        "rnbqkbnr/pppppppp w KQkq - 0 1",                              // 2 ranks
        "9/8/8/8/8/8/8/8 w - - 0 1",                                   // rank overflow
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN w KQkq - 0 1",     // short rank
        "xnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",    // bad piece
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",    // bad side
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KXkq - 0 1",    // bad castling
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1",   // bad ep square
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - abc 1",  // bad clock
        "8/8/8/4k3/8/8/8/8 w - - 0 1",                                 // no white king
        "4k3/8/8/8/8/8/8/3KK3 w - - 0 1",                              // two white kings
    ];
    for fen in bad {
        assert!(
            matches!(
                Position::from_fen(fen),
                Err(EngineError::MalformedPosition { .. })
            ),
            "expected rejection of {fen:?}"
        );
    }
}
