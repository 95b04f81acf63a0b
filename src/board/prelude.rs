//! Prelude module for convenient imports.
//!
//! Re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use pawnstorm::board::prelude::*;
//! ```

pub use super::{
    Bitboard, Board, Color, Move, MoveList, Piece, Search, Square, SquareError, MAX_SCORE,
    MIN_SCORE,
};
