//! Alpha-beta search tests.

use super::sq;
use crate::board::{Board, Color, Move, Piece, Search};

fn place(board: &mut Board, color: Color, piece: Piece, at: &str) {
    board.set_piece(Some((color, piece)), sq(at));
}

#[test]
fn depth_one_grabs_the_biggest_capture() {
    let mut board = Board::new();
    place(&mut board, Color::White, Piece::King, "h1");
    place(&mut board, Color::White, Piece::Queen, "d1");
    place(&mut board, Color::Black, Piece::King, "h8");
    place(&mut board, Color::Black, Piece::Knight, "d7");
    place(&mut board, Color::Black, Piece::Pawn, "g4");

    let mut search = Search::new();
    let best = search.best_move(&mut board, Color::White, 1).unwrap();
    assert_eq!(
        best,
        Move::capture(Color::White, Piece::Queen, sq("d1"), sq("d7"), Piece::Knight)
    );
}

#[test]
fn finds_the_back_rank_mate_in_one() {
    let mut board = Board::new();
    place(&mut board, Color::White, Piece::King, "a1");
    place(&mut board, Color::White, Piece::Rook, "a7");
    place(&mut board, Color::White, Piece::Rook, "b6");
    place(&mut board, Color::Black, Piece::King, "h8");

    let mut search = Search::new();
    let best = search.best_move(&mut board, Color::White, 3).unwrap();
    assert_eq!(
        best,
        Move::quiet(Color::White, Piece::Rook, sq("b6"), sq("b8"))
    );

    board.make_move(&best);
    assert!(board.is_in_checkmate(Color::Black));
}

#[test]
fn prefers_mate_to_winning_material() {
    // Qxb5 wins a rook; Qxg7, protected by the bishop, is mate.
    let mut board = Board::new();
    place(&mut board, Color::White, Piece::King, "a1");
    place(&mut board, Color::White, Piece::Queen, "e5");
    place(&mut board, Color::White, Piece::Bishop, "b2");
    place(&mut board, Color::Black, Piece::King, "h8");
    place(&mut board, Color::Black, Piece::Pawn, "g7");
    place(&mut board, Color::Black, Piece::Rook, "b5");

    let mut search = Search::new();
    let best = search.best_move(&mut board, Color::White, 2).unwrap();
    assert_eq!(
        best,
        Move::capture(Color::White, Piece::Queen, sq("e5"), sq("g7"), Piece::Pawn)
    );
}

#[test]
fn defends_against_a_mate_threat_at_depth_three() {
    // White threatens Qxh7 mate: the g5 knight guards h7 and the b2
    // bishop pins the g7 pawn. Rook retreats and most queen moves let
    // the mate through; capturing the knight both removes the guard and
    // keeps the material deficit smallest.
    let mut board = Board::new();
    place(&mut board, Color::White, Piece::King, "h2");
    place(&mut board, Color::White, Piece::Queen, "e4");
    place(&mut board, Color::White, Piece::Knight, "g5");
    place(&mut board, Color::White, Piece::Bishop, "b2");
    place(&mut board, Color::Black, Piece::King, "h8");
    place(&mut board, Color::Black, Piece::Rook, "g8");
    place(&mut board, Color::Black, Piece::Pawn, "g7");
    place(&mut board, Color::Black, Piece::Pawn, "h7");
    place(&mut board, Color::Black, Piece::Queen, "a5");

    let mut search = Search::new();
    let best = search.best_move(&mut board, Color::Black, 3).unwrap();
    assert_eq!(
        best,
        Move::capture(Color::Black, Piece::Queen, sq("a5"), sq("g5"), Piece::Knight)
    );

    // The defense holds on the following ply.
    board.make_move(&best);
    let reply = search.best_move(&mut board, Color::White, 2).unwrap();
    board.make_move(&reply);
    assert!(!board.is_in_checkmate(Color::Black));
}

#[test]
fn promotes_to_a_queen_during_search() {
    let mut board = Board::new();
    place(&mut board, Color::White, Piece::King, "a1");
    place(&mut board, Color::White, Piece::Pawn, "e7");
    place(&mut board, Color::Black, Piece::King, "h8");

    let mut search = Search::new();
    let best = search.best_move(&mut board, Color::White, 2).unwrap();
    assert_eq!(
        best,
        Move::quiet(Color::White, Piece::Pawn, sq("e7"), sq("e8"))
    );

    board.make_move(&best);
    assert!(board.promotes(&best));
    board.promote(Color::White, Piece::Queen, best.to);
    assert_eq!(board.piece_at(sq("e8")), Some((Color::White, Piece::Queen)));
}

#[test]
fn returns_none_when_no_move_exists() {
    let mut mated = Board::default();
    mated.set_piece(Some((Color::Black, Piece::Queen)), sq("f2"));
    mated.set_piece(Some((Color::Black, Piece::Bishop)), sq("h4"));

    let mut search = Search::new();
    assert!(search.best_move(&mut mated, Color::White, 3).is_none());

    let mut stalemated = Board::new();
    place(&mut stalemated, Color::White, Piece::King, "a1");
    place(&mut stalemated, Color::White, Piece::Queen, "g6");
    place(&mut stalemated, Color::Black, Piece::King, "h8");
    assert!(search.best_move(&mut stalemated, Color::Black, 3).is_none());
}

#[test]
fn search_restores_the_board_it_was_given() {
    let mut board = Board::default();
    let before = board.clone();
    let mut search = Search::new();
    search.best_move(&mut board, Color::White, 3);
    assert_eq!(board, before);
}

#[test]
fn repeated_searches_reuse_the_cache() {
    let mut board = Board::default();
    let mut search = Search::new();

    let first = search.best_move(&mut board, Color::White, 3);
    let cached = search.cache_len();
    assert!(cached > 0);

    let second = search.best_move(&mut board, Color::White, 3);
    assert_eq!(first, second);

    search.clear_cache();
    assert_eq!(search.cache_len(), 0);
}

#[test]
fn deeper_searches_agree_on_a_forced_mate() {
    let mut board = Board::new();
    place(&mut board, Color::White, Piece::King, "a1");
    place(&mut board, Color::White, Piece::Rook, "a7");
    place(&mut board, Color::White, Piece::Rook, "b6");
    place(&mut board, Color::Black, Piece::King, "h8");

    let mut search = Search::new();
    let shallow = search.best_move(&mut board, Color::White, 2).unwrap();
    let deep = search.best_move(&mut board, Color::White, 3).unwrap();
    assert_eq!(shallow.to, sq("b8"));
    assert_eq!(shallow, deep);
}
