//! Static position evaluation.

use super::state::Board;
use super::types::{Color, Piece};

impl Board {
    /// Material difference in pawns: positive favors White. Positional,
    /// mobility, and king-safety terms are deliberately absent; checkmate
    /// terminal scores dominate material during search.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let mut score = 0;
        for color in Color::BOTH {
            for piece in Piece::ALL {
                let count = self.bitboard(color, piece).popcount() as i32;
                score += color.sign() * piece.value() * count;
            }
        }
        score
    }
}
