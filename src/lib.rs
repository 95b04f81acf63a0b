pub mod board;
pub mod tt;
pub mod zobrist;

pub use board::{Bitboard, Board, Color, Move, Piece, Square};
pub use board::{Search, MAX_SCORE, MIN_SCORE};
pub use tt::TranspositionTable;
