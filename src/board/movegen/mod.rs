//! Pseudo-legal candidate move generation.
//!
//! Enumeration order is fixed so searches are deterministic: piece kinds
//! pawn through king, ascending bit index within a kind, direction-table
//! order within a piece.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::masks::{Step, DIAGONAL, ORTHOGONAL};
use super::state::Board;
use super::types::{Color, Move, MoveList, Piece};

impl Board {
    /// Every move that respects piece movement patterns for `color`. Moves
    /// that leave the mover in check are included; the rules oracle filters
    /// them.
    #[must_use]
    pub fn candidate_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();

        for from in self.bitboard(color, Piece::Pawn).bits() {
            self.pawn_moves(color, from, &mut moves);
        }
        for from in self.bitboard(color, Piece::Knight).bits() {
            self.knight_moves(color, from, &mut moves);
        }
        for from in self.bitboard(color, Piece::Bishop).bits() {
            self.slider_moves(color, Piece::Bishop, from, &DIAGONAL, &mut moves);
        }
        for from in self.bitboard(color, Piece::Rook).bits() {
            self.slider_moves(color, Piece::Rook, from, &ORTHOGONAL, &mut moves);
        }
        for from in self.bitboard(color, Piece::Queen).bits() {
            self.slider_moves(color, Piece::Queen, from, &ORTHOGONAL, &mut moves);
            self.slider_moves(color, Piece::Queen, from, &DIAGONAL, &mut moves);
        }
        for from in self.bitboard(color, Piece::King).bits() {
            self.king_moves(color, from, &mut moves);
        }

        moves
    }

    /// Emit one move per reachable pattern destination: in bounds (guard
    /// already applied) and not occupied by a same-color piece.
    pub(super) fn step_moves(
        &self,
        color: Color,
        piece: Piece,
        from: super::types::Bitboard,
        steps: &[Step],
        out: &mut MoveList,
    ) {
        for step in steps {
            let to = step.apply(from);
            if to.is_empty() || self.is_occupied_by(color, to) {
                continue;
            }
            match self.piece_at(to) {
                Some((_, victim)) => out.push(Move::capture(color, piece, from, to, victim)),
                None => out.push(Move::quiet(color, piece, from, to)),
            }
        }
    }
}
