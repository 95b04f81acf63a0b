//! Move record and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::bitboard::Bitboard;
use super::piece::{Color, Piece};

/// A move, carrying enough information to be exactly reversed.
///
/// `from` and `to` are square masks. `captured` records the opponent piece
/// standing on the destination, if any; its color is always
/// `color.opponent()`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub color: Color,
    pub from: Bitboard,
    pub to: Bitboard,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

impl Move {
    /// Create a move that does not capture
    #[inline]
    #[must_use]
    pub const fn quiet(color: Color, piece: Piece, from: Bitboard, to: Bitboard) -> Self {
        Move {
            color,
            from,
            to,
            piece,
            captured: None,
        }
    }

    /// Create a capture move
    #[inline]
    #[must_use]
    pub const fn capture(
        color: Color,
        piece: Piece,
        from: Bitboard,
        to: Bitboard,
        victim: Piece,
    ) -> Self {
        Move {
            color,
            from,
            to,
            piece,
            captured: Some(victim),
        }
    }

    /// Returns true if this move captures a piece
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from.square(), self.to.square())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move({} {:?} {}{}",
            self.color,
            self.piece,
            self.from.square(),
            self.to.square()
        )?;
        if let Some(victim) = self.captured {
            write!(f, " x{victim:?}")?;
        }
        write!(f, ")")
    }
}

/// List of moves in generation order.
#[derive(Clone, Debug, Default)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        // 40ish covers most middlegame positions without reallocating
        MoveList {
            moves: Vec::with_capacity(48),
        }
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    /// Set-membership test, used by callers validating an entered move
    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Move {
        &self.moves[idx]
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}
