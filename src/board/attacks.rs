//! Attack, blocker, and escape mask computation.
//!
//! These queries walk the inverse movement patterns from the target
//! square; the legality oracle is built on top of them.

use super::masks::{between_masks, pawn_captures, pawn_push, Step, DIAGONAL, KING_STEPS, KNIGHT_STEPS, ORTHOGONAL};
use super::state::Board;
use super::types::{Bitboard, Color, Piece};

/// Squares strictly between two square masks along a rank, file, or
/// diagonal; empty when the squares are not collinear.
#[must_use]
pub fn between(a: Bitboard, b: Bitboard) -> Bitboard {
    between_masks(a, b)
}

impl Board {
    /// Union of the squares holding pieces of `by` whose movement pattern
    /// reaches `target`. Pawns count by their capture diagonals only.
    #[must_use]
    pub fn attackers_of(&self, target: Bitboard, by: Color) -> Bitboard {
        let mut attackers = Bitboard::EMPTY;

        // A pawn of `by` attacks the target from the squares the opposite
        // color's capture steps reach when walked from the target.
        for step in pawn_captures(by.opponent()) {
            let origin = step.apply(target);
            if origin.intersects(self.bitboard(by, Piece::Pawn)) {
                attackers |= origin;
            }
        }

        attackers |= self.pattern_origins(target, self.bitboard(by, Piece::Knight), &KNIGHT_STEPS);
        attackers |= self.pattern_origins(target, self.bitboard(by, Piece::King), &KING_STEPS);

        attackers |= self.ray_origins(target, by, &ORTHOGONAL, |p| p.moves_straight());
        attackers |= self.ray_origins(target, by, &DIAGONAL, |p| p.moves_diagonally());

        attackers
    }

    /// Union of the squares holding pieces of `by` that could move onto the
    /// empty square `target`, e.g. to block a check. Pawns count by their
    /// forward moves, including a double push from the home rank, and the
    /// king is excluded: it cannot block a check on itself.
    #[must_use]
    pub fn blockers_to(&self, target: Bitboard, by: Color) -> Bitboard {
        let mut blockers = Bitboard::EMPTY;

        let pawns = self.bitboard(by, Piece::Pawn);
        let reverse = pawn_push(by.opponent());
        let one_behind = reverse.apply(target);
        if one_behind.intersects(pawns) {
            blockers |= one_behind;
        } else if one_behind.any() && !self.is_occupied(one_behind) {
            let two_behind = reverse.apply(one_behind);
            if two_behind.intersects(pawns)
                && two_behind.intersects(Bitboard::rank(by.pawn_home_rank()))
            {
                blockers |= two_behind;
            }
        }

        blockers |= self.pattern_origins(target, self.bitboard(by, Piece::Knight), &KNIGHT_STEPS);

        blockers |= self.ray_origins(target, by, &ORTHOGONAL, |p| p.moves_straight());
        blockers |= self.ray_origins(target, by, &DIAGONAL, |p| p.moves_diagonally());

        blockers
    }

    /// Squares adjacent to the king that are not occupied by same-color
    /// pieces. Whether the squares are attacked is the oracle's concern.
    #[must_use]
    pub fn escape_squares(&self, king: Bitboard, color: Color) -> Bitboard {
        let mut escapes = Bitboard::EMPTY;
        for step in KING_STEPS {
            escapes |= step.apply(king);
        }
        escapes & !self.color_mask(color)
    }

    /// Origins in `candidates` that reach `target` by one application of a
    /// step pattern. Step patterns are their own inverse up to sign, so the
    /// table is walked from the target.
    fn pattern_origins(&self, target: Bitboard, candidates: Bitboard, steps: &[Step]) -> Bitboard {
        let mut origins = Bitboard::EMPTY;
        for step in steps {
            let origin = step.apply(target);
            if origin.intersects(candidates) {
                origins |= origin;
            }
        }
        origins
    }

    /// Walk each ray outward from `target` until a piece is met; keep its
    /// square when it belongs to `by` and slides along this ray.
    fn ray_origins(
        &self,
        target: Bitboard,
        by: Color,
        dirs: &[Step],
        reaches: impl Fn(Piece) -> bool,
    ) -> Bitboard {
        let mut origins = Bitboard::EMPTY;
        for step in dirs {
            let mut cur = step.apply(target);
            while cur.any() {
                if let Some((color, piece)) = self.piece_at(cur) {
                    if color == by && reaches(piece) {
                        origins |= cur;
                    }
                    break;
                }
                cur = step.apply(cur);
            }
        }
        origins
    }
}
