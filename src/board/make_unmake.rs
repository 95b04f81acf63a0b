//! Applying and reverting moves.

use super::state::Board;
use super::types::{Bitboard, Color, Move, Piece};

impl Board {
    /// Apply a move: clear the from-square, then put the moving piece on
    /// the to-square. Whatever stood on the to-square is silently replaced;
    /// the move record keeps it recoverable.
    pub fn make_move(&mut self, mv: &Move) {
        self.set_piece(None, mv.from);
        self.set_piece(Some((mv.color, mv.piece)), mv.to);
    }

    /// Revert a move: exact inverse of [`Board::make_move`] for the same
    /// move record. Also undoes a promotion substitution on the to-square,
    /// since both squares are rewritten unconditionally.
    pub fn undo_move(&mut self, mv: &Move) {
        self.set_piece(Some((mv.color, mv.piece)), mv.from);
        self.set_piece(mv.captured.map(|p| (mv.color.opponent(), p)), mv.to);
    }

    /// True when the move's destination lies on the mover's promotion
    /// rank. Callers must separately check that the moving piece is a pawn.
    #[must_use]
    pub fn moving_to_promotion_rank(&self, mv: &Move) -> bool {
        mv.to.intersects(Bitboard::rank(mv.color.promotion_rank()))
    }

    /// Substitute a promoted piece on a square, replacing the pawn that
    /// just arrived there.
    pub fn promote(&mut self, color: Color, piece: Piece, mask: Bitboard) {
        self.set_piece(Some((color, piece)), mask);
    }
}
