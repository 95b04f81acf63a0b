//! Board state: twelve bitboards and their derived queries.

use std::fmt;

use super::types::{Bitboard, Color, Piece, Square};
use crate::zobrist::{piece_code, ZOBRIST};

/// A chess position encoded as twelve bitboards, one per piece kind and
/// color.
///
/// Invariants, holding between externally observable states:
/// - no two bitboards share a set bit;
/// - once set up, each side's king bitboard has exactly one set bit;
/// - pawn bitboards have no bits on the back ranks.
///
/// A board starts empty; callers populate it with [`Board::initial_setup`]
/// or [`Board::set_piece`] before querying. After that it is mutated only
/// through make/undo pairs.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
        }
    }

    /// Place the standard starting arrangement: pawns on ranks 1 and 6,
    /// back-rank pieces as usual.
    pub fn initial_setup(&mut self) {
        self.pieces = [[Bitboard::EMPTY; 6]; 2];

        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (col, piece) in back_rank.iter().enumerate() {
            self.set_piece(Some((Color::White, *piece)), Square(0, col).mask());
            self.set_piece(Some((Color::White, Piece::Pawn)), Square(1, col).mask());
            self.set_piece(Some((Color::Black, Piece::Pawn)), Square(6, col).mask());
            self.set_piece(Some((Color::Black, *piece)), Square(7, col).mask());
        }
    }

    /// The bitboard of one piece kind and color, exposed for rendering
    /// and tests.
    #[inline]
    #[must_use]
    pub fn bitboard(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    /// The piece standing on a square mask, if any. Returns `None` when the
    /// mask matches no bitboard. The disjointness invariant makes the answer
    /// unambiguous; `mask` must be a single bit.
    #[must_use]
    pub fn piece_at(&self, mask: Bitboard) -> Option<(Color, Piece)> {
        debug_assert!(mask.is_single());
        for color in Color::BOTH {
            for piece in Piece::ALL {
                if self.bitboard(color, piece).intersects(mask) {
                    return Some((color, piece));
                }
            }
        }
        None
    }

    /// Coordinate variant of [`Board::piece_at`], for setup and tests.
    #[must_use]
    pub fn piece_on(&self, row: usize, col: usize) -> Option<(Color, Piece)> {
        Square::new(row, col).and_then(|sq| self.piece_at(sq.mask()))
    }

    /// Clear `mask` from all twelve bitboards, then set it in the given
    /// piece's board. Idempotent for the same argument pair.
    pub fn set_piece(&mut self, piece: Option<(Color, Piece)>, mask: Bitboard) {
        debug_assert!(mask.is_single());
        for side in &mut self.pieces {
            for bb in side.iter_mut() {
                *bb &= !mask;
            }
        }
        if let Some((color, piece)) = piece {
            self.pieces[color.index()][piece.index()] |= mask;
        }
    }

    /// Coordinate variant of [`Board::set_piece`].
    pub fn place(&mut self, piece: Option<(Color, Piece)>, row: usize, col: usize) {
        if let Some(sq) = Square::new(row, col) {
            self.set_piece(piece, sq.mask());
        }
    }

    /// Union of the six bitboards of one color.
    #[must_use]
    pub fn color_mask(&self, color: Color) -> Bitboard {
        self.pieces[color.index()]
            .iter()
            .fold(Bitboard::EMPTY, |acc, bb| acc | *bb)
    }

    /// Union of all twelve bitboards.
    #[must_use]
    pub fn occupancy(&self) -> Bitboard {
        self.color_mask(Color::White) | self.color_mask(Color::Black)
    }

    /// True when any piece stands on `mask`.
    #[inline]
    #[must_use]
    pub fn is_occupied(&self, mask: Bitboard) -> bool {
        self.occupancy().intersects(mask)
    }

    /// True when a piece of `color` stands on `mask`.
    #[inline]
    #[must_use]
    pub fn is_occupied_by(&self, color: Color, mask: Bitboard) -> bool {
        self.color_mask(color).intersects(mask)
    }

    /// Square mask of the given side's king. The king bitboard holds
    /// exactly one bit on any set-up board.
    #[inline]
    #[must_use]
    pub fn king_mask(&self, color: Color) -> Bitboard {
        self.bitboard(color, Piece::King)
    }

    /// Zobrist hash of the position: the XOR of one key per occupied
    /// square. A pure function of the twelve bitboards; side to move is
    /// not folded in (see [`crate::zobrist::cache_key`]).
    #[must_use]
    pub fn zobrist_hash(&self) -> u64 {
        let mut hash = 0u64;
        for color in Color::BOTH {
            for piece in Piece::ALL {
                let code = piece_code(color, piece);
                for bit in self.bitboard(color, piece).bits() {
                    hash ^= ZOBRIST.piece_keys[bit.index()][code];
                }
            }
        }
        hash
    }
}

impl Default for Board {
    /// The standard starting position.
    fn default() -> Self {
        let mut board = Board::new();
        board.initial_setup();
        board
    }
}

impl fmt::Display for Board {
    /// ASCII rendering, Black's back rank on top. White pieces are
    /// uppercase.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..8 {
                let glyph = match self.piece_at(Square(row, col).mask()) {
                    Some((Color::White, piece)) => piece.to_char().to_ascii_uppercase(),
                    Some((Color::Black, piece)) => piece.to_char(),
                    None => '.',
                };
                write!(f, "{glyph} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
