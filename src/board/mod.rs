//! Chess board representation and game logic.
//!
//! Uses twelve bitboards (piece kind x color) for move generation, legality
//! checks, and search. Castling, en passant, and the draw-counting rules are
//! not modeled; promotion is applied as a post-move substitution.
//!
//! # Example
//! ```
//! use pawnstorm::board::{Board, Color};
//!
//! let mut board = Board::default();
//! let moves = board.legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attacks;
mod bits;
mod error;
mod eval;
mod make_unmake;
mod masks;
mod movegen;
pub mod prelude;
mod rules;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::SquareError;
pub use state::Board;
pub use types::{Bitboard, BitboardIter, Color, Move, MoveList, Piece, Square};

// Public API - bit primitives (the board encoding is part of the contract)
pub use bits::{bit_index, intersects, lsb, signed_shift};

// Public API - mask queries consumed alongside the rules oracle
pub use attacks::between;

// Public API - search entry point
pub use search::{Search, MAX_SCORE, MIN_SCORE};
