//! Bitboard type and operations.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::bits;

/// A 64-bit bitboard whose set bits mark a set of squares.
///
/// Bit `8 * row + column` represents square (row, column). A bitboard with
/// exactly one set bit is a "square mask".
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const FILE_A: Bitboard = Bitboard(0x0101010101010101);
    pub const FILE_B: Bitboard = Bitboard(0x0202020202020202);
    pub const FILE_G: Bitboard = Bitboard(0x4040404040404040);
    pub const FILE_H: Bitboard = Bitboard(0x8080808080808080);

    pub const RANK_1: Bitboard = Bitboard(0x00000000000000FF);
    pub const RANK_2: Bitboard = Bitboard(0x000000000000FF00);
    pub const RANK_7: Bitboard = Bitboard(0x00FF000000000000);
    pub const RANK_8: Bitboard = Bitboard(0xFF00000000000000);

    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ALL: Bitboard = Bitboard(!0);

    /// Rank mask for a given row index (0-7)
    #[inline]
    #[must_use]
    pub const fn rank(row: usize) -> Self {
        Bitboard(Self::RANK_1.0 << (row * 8))
    }

    /// File mask for a given column index (0-7)
    #[inline]
    #[must_use]
    pub const fn file(col: usize) -> Self {
        Bitboard(Self::FILE_A.0 << col)
    }

    /// Square mask for a single square
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        sq.mask()
    }

    /// Returns true if the bitboard is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the bitboard has any set bit
    #[inline]
    #[must_use]
    pub const fn any(self) -> bool {
        self.0 != 0
    }

    /// Number of set bits
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if exactly one bit is set
    #[inline]
    #[must_use]
    pub const fn is_single(self) -> bool {
        self.0.is_power_of_two()
    }

    /// Returns true if this board shares any square with `other`
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Bitboard) -> bool {
        bits::intersects(self.0, other.0)
    }

    /// Returns true if the given square is set
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        bits::intersects(self.0, sq.mask().0)
    }

    /// Bit index of a square mask. Meaningful only when exactly one bit
    /// is set.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        bits::bit_index(self.0)
    }

    /// The square of a square mask
    #[inline]
    #[must_use]
    pub const fn square(self) -> Square {
        Square::from_index(self.index())
    }

    /// Iterate the set bits as single-bit masks, lowest index first
    #[inline]
    #[must_use]
    pub fn bits(self) -> BitboardIter {
        BitboardIter(self.0)
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Bitboard) {
        self.0 ^= rhs.0;
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitboard({:#018x})", self.0)
    }
}

/// Iterator over the set bits of a bitboard, yielding square masks
/// lowest index first. Its length equals the population count.
pub struct BitboardIter(u64);

impl Iterator for BitboardIter {
    type Item = Bitboard;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let bit = bits::lsb(self.0);
            self.0 ^= bit;
            Some(Bitboard(bit))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}
