//! Direction tables and precomputed square masks.
//!
//! Every movement pattern is a (guard mask, signed shift) pair: shifting
//! `x & guard` by the step amount lands on the destination square, and the
//! guard zeroes out origins whose destination would wrap off the board.

use once_cell::sync::Lazy;

use super::bits::signed_shift;
use super::types::{Bitboard, Color};

const RANK_1: u64 = 0x0000_0000_0000_00ff;
const RANK_2: u64 = 0x0000_0000_0000_ff00;
const RANK_7: u64 = 0x00ff_0000_0000_0000;
const RANK_8: u64 = 0xff00_0000_0000_0000;
const FILE_A: u64 = 0x0101_0101_0101_0101;
const FILE_B: u64 = 0x0202_0202_0202_0202;
const FILE_G: u64 = 0x4040_4040_4040_4040;
const FILE_H: u64 = 0x8080_8080_8080_8080;

/// One movement direction: a guard mask and a signed shift amount.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Step {
    pub(crate) guard: u64,
    pub(crate) shift: i32,
}

impl Step {
    /// Destination mask of every guarded origin in `bb`.
    #[inline]
    pub(crate) const fn apply(self, bb: Bitboard) -> Bitboard {
        Bitboard(signed_shift(bb.0 & self.guard, self.shift))
    }
}

pub(crate) const UP: Step = Step {
    guard: !RANK_8,
    shift: 8,
};
pub(crate) const DOWN: Step = Step {
    guard: !RANK_1,
    shift: -8,
};
pub(crate) const LEFT: Step = Step {
    guard: !FILE_A,
    shift: -1,
};
pub(crate) const RIGHT: Step = Step {
    guard: !FILE_H,
    shift: 1,
};
pub(crate) const UP_LEFT: Step = Step {
    guard: !RANK_8 & !FILE_A,
    shift: 7,
};
pub(crate) const UP_RIGHT: Step = Step {
    guard: !RANK_8 & !FILE_H,
    shift: 9,
};
pub(crate) const DOWN_LEFT: Step = Step {
    guard: !RANK_1 & !FILE_A,
    shift: -9,
};
pub(crate) const DOWN_RIGHT: Step = Step {
    guard: !RANK_1 & !FILE_H,
    shift: -7,
};

/// Rook directions, also the straight half of the queen's pattern.
pub(crate) const ORTHOGONAL: [Step; 4] = [UP, DOWN, LEFT, RIGHT];

/// Bishop directions, also the diagonal half of the queen's pattern.
pub(crate) const DIAGONAL: [Step; 4] = [UP_LEFT, UP_RIGHT, DOWN_LEFT, DOWN_RIGHT];

/// The king's eight single-step directions.
pub(crate) const KING_STEPS: [Step; 8] =
    [UP, DOWN, LEFT, RIGHT, UP_LEFT, UP_RIGHT, DOWN_LEFT, DOWN_RIGHT];

/// The knight's eight jumps. Each guard excludes the two ranks or files
/// the jump would wrap around.
pub(crate) const KNIGHT_STEPS: [Step; 8] = [
    Step {
        guard: !(RANK_7 | RANK_8) & !FILE_H,
        shift: 17,
    },
    Step {
        guard: !(RANK_7 | RANK_8) & !FILE_A,
        shift: 15,
    },
    Step {
        guard: !RANK_8 & !(FILE_G | FILE_H),
        shift: 10,
    },
    Step {
        guard: !RANK_8 & !(FILE_A | FILE_B),
        shift: 6,
    },
    Step {
        guard: !RANK_1 & !(FILE_G | FILE_H),
        shift: -6,
    },
    Step {
        guard: !RANK_1 & !(FILE_A | FILE_B),
        shift: -10,
    },
    Step {
        guard: !(RANK_1 | RANK_2) & !FILE_H,
        shift: -15,
    },
    Step {
        guard: !(RANK_1 | RANK_2) & !FILE_A,
        shift: -17,
    },
];

/// Pawn single push for the given color.
#[inline]
pub(crate) const fn pawn_push(color: Color) -> Step {
    match color {
        Color::White => UP,
        Color::Black => DOWN,
    }
}

/// The two pawn capture diagonals for the given color, left then right.
#[inline]
pub(crate) const fn pawn_captures(color: Color) -> [Step; 2] {
    match color {
        Color::White => [UP_LEFT, UP_RIGHT],
        Color::Black => [DOWN_LEFT, DOWN_RIGHT],
    }
}

// between_table[a][b]: squares strictly between a and b along a rank,
// file, or diagonal; zero when the squares are not collinear.
static BETWEEN: Lazy<[[u64; 64]; 64]> = Lazy::new(|| {
    let mut table = [[0u64; 64]; 64];
    let dirs: [(isize, isize); 8] = [
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ];
    for a in 0..64usize {
        let row = (a / 8) as isize;
        let col = (a % 8) as isize;
        for (dr, dc) in dirs {
            let mut seen = 0u64;
            let mut r = row + dr;
            let mut c = col + dc;
            while (0..8).contains(&r) && (0..8).contains(&c) {
                let b = (r * 8 + c) as usize;
                table[a][b] = seen;
                seen |= 1u64 << b;
                r += dr;
                c += dc;
            }
        }
    }
    table
});

/// Squares strictly between two square masks, or empty when they are not
/// on a common rank, file, or diagonal.
#[inline]
pub(crate) fn between_masks(a: Bitboard, b: Bitboard) -> Bitboard {
    Bitboard(BETWEEN[a.index()][b.index()])
}
