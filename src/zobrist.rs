//! Zobrist hashing for chess positions.
//!
//! Provides 64-bit position hashes for the transposition cache. The key
//! table is process-wide state, generated once from a fixed seed so runs
//! are reproducible.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Color, Piece};

/// Number of distinct piece codes (six kinds per color).
pub const PIECE_CODES: usize = 12;

pub(crate) struct ZobristKeys {
    // piece_keys[square_index][piece_code]
    pub(crate) piece_keys: [[u64; PIECE_CODES]; 64],
    // XORed into the cache key when Black is to move. The position hash
    // itself stays a pure function of the twelve bitboards.
    pub(crate) side_key: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(0x5eed_cafe_f00d_u64);
        let mut piece_keys = [[0u64; PIECE_CODES]; 64];

        for square in &mut piece_keys {
            for key in square.iter_mut() {
                *key = rng.gen();
            }
        }

        let side_key = rng.gen();

        ZobristKeys {
            piece_keys,
            side_key,
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

/// Map a colored piece to its key-table column: White pawn..king occupy
/// 0..6, Black pawn..king occupy 6..12.
#[inline]
#[must_use]
pub fn piece_code(color: Color, piece: Piece) -> usize {
    color.index() * 6 + piece.index()
}

/// Key used to index the transposition cache: the position hash with the
/// side-to-move key folded in for Black. Without it, positions identical
/// in piece placement but differing in mover would alias.
#[inline]
#[must_use]
pub fn cache_key(position_hash: u64, to_move: Color) -> u64 {
    match to_move {
        Color::White => position_hash,
        Color::Black => position_hash ^ ZOBRIST.side_key,
    }
}
