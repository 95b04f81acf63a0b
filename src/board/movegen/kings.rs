//! King move generation.

use crate::board::masks::KING_STEPS;
use crate::board::state::Board;
use crate::board::types::{Bitboard, Color, MoveList, Piece};

impl Board {
    pub(super) fn king_moves(&self, color: Color, from: Bitboard, out: &mut MoveList) {
        self.step_moves(color, Piece::King, from, &KING_STEPS, out);
    }
}
