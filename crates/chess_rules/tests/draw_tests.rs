//! Tests for draw detection predicates:
//! - Stalemate
//! - Fifty-move rule
//! - Insufficient material

use chess_rules::{Color, Position, legal_moves};

// =============================================================================
// Stalemate Tests
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    // Black king on a8, White queen on b6, White king on c7
    let pos = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").expect("valid fen");

    assert!(
        legal_moves(&pos).is_empty(),
        "Stalemate position should have no legal moves"
    );
    assert!(
        !pos.in_check(Color::Black),
        "Stalemate means king is not in check"
    );
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    // White king on g6, white pawn on g7, black king on g8
    let pos = Position::from_fen("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1").expect("valid fen");

    assert!(
        legal_moves(&pos).is_empty(),
        "Stalemate position should have no legal moves"
    );
    assert!(
        !pos.in_check(Color::Black),
        "Stalemate means king is not in check"
    );
}

// =============================================================================
// Fifty-Move Rule Tests
// =============================================================================

#[test]
fn test_fifty_move_rule_at_100_halfmoves() {
    let pos = Position::from_fen("8/8/8/4k3/8/4K3/8/8 w - - 100 60").expect("valid fen");
    assert!(pos.is_fifty_move_draw());
}

#[test]
fn test_fifty_move_rule_at_99_halfmoves() {
    let pos = Position::from_fen("8/8/8/4k3/8/4K3/8/8 w - - 99 60").expect("valid fen");
    assert!(!pos.is_fifty_move_draw());
}

#[test]
fn test_fifty_move_clock_resets_on_pawn_move() {
    let mut pos = Position::from_fen("8/8/8/4k3/8/3K4/4P3/8 w - - 99 60").expect("valid fen");

    let pawn_move = legal_moves(&pos)
        .into_iter()
        .find(|m| m.from == 12)
        .expect("the e2 pawn has a move");
    pos.make_move(pawn_move);

    assert!(!pos.is_fifty_move_draw());
    assert_eq!(pos.halfmove_clock, 0);
}

// =============================================================================
// Insufficient Material Tests
// =============================================================================

#[test]
fn test_insufficient_material_king_vs_king() {
    let pos = Position::from_fen("8/8/8/4k3/8/4K3/8/8 w - - 0 1").expect("valid fen");
    assert!(pos.is_insufficient_material());
}

#[test]
fn test_insufficient_material_king_bishop_vs_king() {
    let pos = Position::from_fen("8/8/8/4k3/8/4KB2/8/8 w - - 0 1").expect("valid fen");
    assert!(pos.is_insufficient_material());
}

#[test]
fn test_insufficient_material_king_knight_vs_king() {
    let pos = Position::from_fen("8/8/8/4k3/8/4KN2/8/8 w - - 0 1").expect("valid fen");
    assert!(pos.is_insufficient_material());
}

#[test]
fn test_insufficient_material_is_symmetric() {
    let pos = Position::from_fen("8/8/4n3/4k3/8/4K3/8/8 w - - 0 1").expect("valid fen");
    assert!(pos.is_insufficient_material());
}

#[test]
fn test_sufficient_material_with_pawn() {
    let pos = Position::from_fen("8/8/8/4k3/8/4K3/4P3/8 w - - 0 1").expect("valid fen");
    assert!(!pos.is_insufficient_material());
}

#[test]
fn test_sufficient_material_with_rook() {
    let pos = Position::from_fen("8/8/8/4k3/8/4K3/8/4R3 w - - 0 1").expect("valid fen");
    assert!(!pos.is_insufficient_material());
}

#[test]
fn test_sufficient_material_with_queen() {
    let pos = Position::from_fen("8/8/8/4k3/8/4K3/8/4Q3 w - - 0 1").expect("valid fen");
    assert!(!pos.is_insufficient_material());
}

#[test]
fn test_two_minors_count_as_sufficient() {
    // The detector is a deliberate approximation: any second minor piece,
    // even same-color bishops, is treated as sufficient material.
    let pos = Position::from_fen("5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1").expect("valid fen");
    assert!(!pos.is_insufficient_material());

    let pos = Position::from_fen("8/8/8/4k3/8/4K3/3NN3/8 w - - 0 1").expect("valid fen");
    assert!(!pos.is_insufficient_material());
}
