//! Board and engine tests.

mod make_unmake;
mod search;

use crate::board::{Bitboard, Board, Color, Move, Square};

/// Square mask from algebraic notation, for terse test setup.
pub(crate) fn sq(notation: &str) -> Bitboard {
    notation
        .parse::<Square>()
        .unwrap_or_else(|_| panic!("bad square {notation}"))
        .mask()
}

/// Find the legal move between two squares, panicking when absent.
pub(crate) fn find_move(board: &mut Board, color: Color, from: &str, to: &str) -> Move {
    let (from, to) = (sq(from), sq(to));
    board
        .legal_moves(color)
        .into_iter()
        .find(|m| m.from == from && m.to == to)
        .expect("expected move not found")
}
