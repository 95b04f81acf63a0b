//! Knight move generation.

use crate::board::masks::KNIGHT_STEPS;
use crate::board::state::Board;
use crate::board::types::{Bitboard, Color, MoveList, Piece};

impl Board {
    pub(super) fn knight_moves(&self, color: Color, from: Bitboard, out: &mut MoveList) {
        self.step_moves(color, Piece::Knight, from, &KNIGHT_STEPS, out);
    }
}
