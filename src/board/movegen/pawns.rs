//! Pawn move generation.

use crate::board::masks::{pawn_captures, pawn_push};
use crate::board::state::Board;
use crate::board::types::{Bitboard, Color, Move, MoveList, Piece};

impl Board {
    /// Single pushes onto empty squares, double pushes from the home rank
    /// when both squares are empty, and diagonal captures. Promotion is not
    /// emitted as distinct moves; the search substitutes after the push.
    pub(super) fn pawn_moves(&self, color: Color, from: Bitboard, out: &mut MoveList) {
        let push = pawn_push(color);

        let one = push.apply(from);
        if one.any() && !self.is_occupied(one) {
            out.push(Move::quiet(color, Piece::Pawn, from, one));

            if from.intersects(Bitboard::rank(color.pawn_home_rank())) {
                let two = push.apply(one);
                if two.any() && !self.is_occupied(two) {
                    out.push(Move::quiet(color, Piece::Pawn, from, two));
                }
            }
        }

        for step in pawn_captures(color) {
            let to = step.apply(from);
            if to.is_empty() {
                continue;
            }
            if let Some((victim_color, victim)) = self.piece_at(to) {
                if victim_color != color {
                    out.push(Move::capture(color, Piece::Pawn, from, to, victim));
                }
            }
        }
    }
}
