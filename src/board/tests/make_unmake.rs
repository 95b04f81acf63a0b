//! Make/undo move tests.

use super::{find_move, sq};
use crate::board::{Board, Color, Move, Piece};

#[test]
fn quiet_move_round_trips_exactly() {
    let mut board = Board::default();
    let before = board.clone();
    let original_hash = board.zobrist_hash();

    let mv = find_move(&mut board, Color::White, "e2", "e4");
    board.make_move(&mv);
    assert_ne!(board, before);

    board.undo_move(&mv);
    assert_eq!(board, before);
    assert_eq!(board.zobrist_hash(), original_hash);
}

#[test]
fn capture_round_trips_and_restores_the_victim() {
    let mut board = Board::new();
    board.set_piece(Some((Color::White, Piece::King)), sq("e1"));
    board.set_piece(Some((Color::Black, Piece::King)), sq("e8"));
    board.set_piece(Some((Color::White, Piece::Rook)), sq("d1"));
    board.set_piece(Some((Color::Black, Piece::Pawn)), sq("d5"));
    let before = board.clone();

    let mv = Move::capture(Color::White, Piece::Rook, sq("d1"), sq("d5"), Piece::Pawn);
    board.make_move(&mv);
    assert_eq!(
        board.piece_at(sq("d5")),
        Some((Color::White, Piece::Rook))
    );
    assert_eq!(board.piece_at(sq("d1")), None);

    board.undo_move(&mv);
    assert_eq!(board, before);
    assert_eq!(
        board.piece_at(sq("d5")),
        Some((Color::Black, Piece::Pawn))
    );
}

#[test]
fn undo_reverts_a_promotion_substitution() {
    let mut board = Board::new();
    board.set_piece(Some((Color::White, Piece::King)), sq("a1"));
    board.set_piece(Some((Color::Black, Piece::King)), sq("h8"));
    board.set_piece(Some((Color::White, Piece::Pawn)), sq("c7"));
    let before = board.clone();

    let mv = Move::quiet(Color::White, Piece::Pawn, sq("c7"), sq("c8"));
    assert!(board.promotes(&mv));

    board.make_move(&mv);
    board.promote(Color::White, Piece::Queen, mv.to);
    assert_eq!(
        board.piece_at(sq("c8")),
        Some((Color::White, Piece::Queen))
    );

    board.undo_move(&mv);
    assert_eq!(board, before);
}

#[test]
fn set_piece_is_idempotent() {
    let mut board = Board::new();
    board.set_piece(Some((Color::Black, Piece::Knight)), sq("f6"));
    let once = board.clone();
    board.set_piece(Some((Color::Black, Piece::Knight)), sq("f6"));
    assert_eq!(board, once);

    board.set_piece(None, sq("f6"));
    board.set_piece(None, sq("f6"));
    assert_eq!(board.piece_at(sq("f6")), None);
}

#[test]
fn set_piece_replaces_whatever_was_there() {
    let mut board = Board::new();
    board.set_piece(Some((Color::White, Piece::Rook)), sq("d4"));
    board.set_piece(Some((Color::Black, Piece::Queen)), sq("d4"));

    assert_eq!(
        board.piece_at(sq("d4")),
        Some((Color::Black, Piece::Queen))
    );
    assert!(board.bitboard(Color::White, Piece::Rook).is_empty());
}

#[test]
fn promotion_rank_detection_is_color_relative() {
    let board = Board::new();

    let white = Move::quiet(Color::White, Piece::Pawn, sq("e7"), sq("e8"));
    let black = Move::quiet(Color::Black, Piece::Pawn, sq("e2"), sq("e1"));
    let mid = Move::quiet(Color::White, Piece::Pawn, sq("e2"), sq("e4"));

    assert!(board.moving_to_promotion_rank(&white));
    assert!(board.moving_to_promotion_rank(&black));
    assert!(!board.moving_to_promotion_rank(&mid));

    // The trigger also requires a pawn; a rook reaching the back rank
    // does not promote.
    let rook = Move::quiet(Color::White, Piece::Rook, sq("e7"), sq("e8"));
    assert!(board.moving_to_promotion_rank(&rook));
    assert!(!board.promotes(&rook));
}
