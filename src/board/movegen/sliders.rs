//! Sliding piece move generation (bishops, rooks, queens).

use crate::board::masks::Step;
use crate::board::state::Board;
use crate::board::types::{Bitboard, Color, Move, MoveList, Piece};

impl Board {
    /// Walk each direction one step at a time: emit every empty square,
    /// emit an opposite-color capture and stop, or stop short of a
    /// same-color piece.
    pub(super) fn slider_moves(
        &self,
        color: Color,
        piece: Piece,
        from: Bitboard,
        dirs: &[Step],
        out: &mut MoveList,
    ) {
        for step in dirs {
            let mut to = step.apply(from);
            while to.any() {
                if self.is_occupied_by(color, to) {
                    break;
                }
                match self.piece_at(to) {
                    Some((_, victim)) => {
                        out.push(Move::capture(color, piece, from, to, victim));
                        break;
                    }
                    None => out.push(Move::quiet(color, piece, from, to)),
                }
                to = step.apply(to);
            }
        }
    }
}
