//! Core chess types.
//!
//! - `Piece` and `Color` - chess piece kinds and colors
//! - `Square` - (row, column) board coordinate
//! - `Bitboard` - 64-bit board representation
//! - `Move` and `MoveList` - move representation

mod bitboard;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use moves::{Move, MoveList};
pub use piece::{Color, Piece};
pub use square::Square;
