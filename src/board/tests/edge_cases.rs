//! Edge case tests: pins, check evasion, checkmate and stalemate.

use super::{square_set, squares};
use crate::board::{Board, BoardBuilder, Color, Piece, Square};

fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

#[test]
fn test_twenty_legal_moves_at_start() {
    let board = Board::new();
    assert_eq!(board.all_legal_moves(Color::White).len(), 20);
    assert_eq!(board.all_legal_moves(Color::Black).len(), 20);
}

#[test]
fn test_pinned_piece_cannot_leave_the_line() {
    let board = Board::from_fen("k3r3/8/8/8/8/8/4B3/4K3").unwrap();
    assert!(!board.pseudo_legal_moves(sq("e2")).is_empty());
    assert!(board.legal_moves(sq("e2")).is_empty());
}

#[test]
fn test_pinned_rook_slides_along_the_pin() {
    let board = Board::from_fen("k3r3/8/8/8/4R3/8/8/4K3").unwrap();
    assert_eq!(
        square_set(&board.legal_moves(sq("e4"))),
        squares(&["e2", "e3", "e5", "e6", "e7", "e8"])
    );
}

#[test]
fn test_king_cannot_step_onto_attacked_square() {
    let board = Board::from_fen("k2r4/8/8/8/8/8/8/4K3").unwrap();
    assert_eq!(
        square_set(&board.legal_moves(sq("e1"))),
        squares(&["e2", "f1", "f2"])
    );
}

#[test]
fn test_king_cannot_capture_defended_piece() {
    // Queen on f2 is guarded by the knight on h3
    let board = Board::from_fen("k7/8/8/8/8/7n/5q2/4K3").unwrap();
    assert!(board.is_in_check(Color::White));
    assert!(!board.legal_moves(sq("e1")).contains(&sq("f2")));
}

#[test]
fn test_own_blocker_counts_as_attacked_for_king_capture() {
    // The black rook defends its own pawn on a2, so Kxa2 is not allowed
    let board = Board::from_fen("k7/8/8/8/8/8/p7/rK6").unwrap();
    assert!(board.is_in_check(Color::White));
    let moves = square_set(&board.legal_moves(sq("b1")));
    assert!(!moves.contains(&sq("a2")));
    assert!(moves.contains(&sq("a1")) || moves.contains(&sq("b2")) || moves.contains(&sq("c2")));
}

#[test]
fn test_pawn_attack_is_diagonal_only() {
    let board = Board::from_fen("k7/8/8/8/8/4p3/8/4K3").unwrap();
    assert!(!board.is_in_check(Color::White));
    let moves = square_set(&board.legal_moves(sq("e1")));
    assert!(!moves.contains(&sq("d2")));
    assert!(!moves.contains(&sq("f2")));
    assert!(moves.contains(&sq("e2")));
}

#[test]
fn test_check_must_be_answered() {
    // Rook on e8 checks along the file; only moves that block, capture or
    // step aside survive
    let board = Board::from_fen("k3r3/8/8/8/8/8/3N4/R3K3").unwrap();
    assert!(board.is_in_check(Color::White));
    for mv in board.all_legal_moves(Color::White) {
        let mut scratch = board.clone();
        scratch.apply_move(&mv);
        assert!(!scratch.is_in_check(Color::White), "{mv} leaves check");
    }
    assert!(board.legal_moves(sq("a1")).is_empty());
    assert!(board.legal_moves(sq("d2")).contains(&sq("e4")));
}

#[test]
fn test_attackers_of_lists_every_checker() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("e8"), Color::Black, Piece::Rook)
        .piece(sq("f3"), Color::Black, Piece::Knight)
        .piece(sq("a8"), Color::Black, Piece::King)
        .build();
    assert_eq!(
        square_set(&board.attackers_of(sq("e1"), Color::Black)),
        squares(&["e8", "f3"])
    );
}

#[test]
fn test_scholars_mate_position() {
    let board =
        Board::from_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR").unwrap();
    assert!(board.is_in_check(Color::Black));
    assert!(board.is_checkmate(Color::Black));
    assert!(!board.is_stalemate(Color::Black));
    assert!(board.all_legal_moves(Color::Black).is_empty());
}

#[test]
fn test_back_rank_mate() {
    let board = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1").unwrap();
    assert!(board.is_checkmate(Color::Black));
}

#[test]
fn test_stalemate_position() {
    let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b").unwrap();
    assert!(!board.is_in_check(Color::Black));
    assert!(board.is_stalemate(Color::Black));
    assert!(!board.is_checkmate(Color::Black));
    assert!(!board.has_any_legal_move(Color::Black));
}

#[test]
fn test_check_with_escape_is_not_mate() {
    let board = Board::from_fen("4k3/8/8/8/8/8/8/4RK2").unwrap();
    assert!(board.is_in_check(Color::Black));
    assert!(!board.is_checkmate(Color::Black));
    assert!(!board.is_stalemate(Color::Black));
}

#[test]
fn test_apply_move_promotes_and_marks_moved() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5").unwrap();
    let mv = crate::board::Move::quiet(sq("a7"), sq("a8")).with_promotion(Piece::Rook);
    assert_eq!(board.apply_move(&mv), None);
    let promoted = board.piece_at(sq("a8")).unwrap();
    assert_eq!(promoted.piece, Piece::Rook);
    assert_eq!(promoted.color, Color::White);
    assert!(promoted.has_moved);
    assert!(board.is_empty(sq("a7")));
}

#[test]
fn test_promote_if_needed_only_for_last_rank_pawns() {
    let board = Board::from_fen("7k/P7/8/8/8/8/4P3/4K3").unwrap();
    let push = crate::board::Move::quiet(sq("a7"), sq("a8"));
    assert_eq!(board.promote_if_needed(&push).promotion(), Some(Piece::Queen));

    let quiet = crate::board::Move::quiet(sq("e2"), sq("e4"));
    assert_eq!(board.promote_if_needed(&quiet), quiet);

    let king = crate::board::Move::quiet(sq("h8"), sq("g8"));
    assert_eq!(board.promote_if_needed(&king), king);
}
