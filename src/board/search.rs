//! Fixed-depth alpha-beta minimax over the legality oracle.
//!
//! White maximizes, Black minimizes. Results are cached in a
//! transposition table keyed by the position's Zobrist hash with the
//! side-to-move key folded in.

#[cfg(feature = "logging")]
use log::{debug, trace};

use super::state::Board;
use super::types::{Color, Move, Piece};
use crate::tt::TranspositionTable;
use crate::zobrist::cache_key;

/// Terminal score for a checkmated White; also the alpha window floor.
pub const MIN_SCORE: i32 = -1_000_000;
/// Terminal score for a checkmated Black; also the beta window ceiling.
pub const MAX_SCORE: i32 = 1_000_000;

/// A search instance owning its transposition cache. The cache persists
/// across top-level searches; entries stay valid because keys reflect
/// position and mover, not move history.
#[derive(Debug, Default)]
pub struct Search {
    cache: TranspositionTable,
}

impl Search {
    #[must_use]
    pub fn new() -> Self {
        Search {
            cache: TranspositionTable::new(),
        }
    }

    /// Number of cached positions, exposed for diagnostics.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Pick the legal move with the best score for `color` after searching
    /// `depth` plies: maximum score for White, minimum for Black, first in
    /// generation order on ties. Returns `None` when no legal move exists.
    ///
    /// The board is mutated during the search and restored before
    /// returning.
    pub fn best_move(&mut self, board: &mut Board, color: Color, depth: u32) -> Option<Move> {
        let moves = board.legal_moves(color);
        let mut best: Option<(Move, i32)> = None;

        for mv in moves.iter() {
            board.make_move(mv);
            if board.promotes(mv) {
                board.promote(color, Piece::Queen, mv.to);
            }
            let score = self.minimax(
                board,
                color.opponent(),
                depth.saturating_sub(1),
                MIN_SCORE,
                MAX_SCORE,
            );
            board.undo_move(mv);

            #[cfg(feature = "logging")]
            trace!("{color} {mv} scores {score}");

            let improves = match best {
                None => true,
                Some((_, best_score)) => match color {
                    Color::White => score > best_score,
                    Color::Black => score < best_score,
                },
            };
            if improves {
                best = Some((*mv, score));
            }
        }

        #[cfg(feature = "logging")]
        if let Some((mv, score)) = best {
            debug!(
                "{color} best move {mv} (score {score}, depth {depth}, {} cached positions)",
                self.cache.len()
            );
        }

        best.map(|(mv, _)| mv)
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        color: Color,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if depth == 0 {
            return board.evaluate();
        }
        if board.is_in_checkmate(color) {
            return match color {
                Color::White => MIN_SCORE,
                Color::Black => MAX_SCORE,
            };
        }
        if board.is_in_stalemate(color) {
            return 0;
        }

        let key = cache_key(board.zobrist_hash(), color);
        if let Some(entry) = self.cache.probe(key) {
            if entry.depth >= depth {
                return entry.score;
            }
        }

        let worst = match color {
            Color::White => MIN_SCORE,
            Color::Black => MAX_SCORE,
        };
        // Provisional entry, so a cyclic transposition re-entering this
        // hash at no greater depth terminates instead of recursing.
        self.cache.store(key, depth, worst);

        let mut best = worst;
        for mv in board.legal_moves(color).iter() {
            board.make_move(mv);
            if board.promotes(mv) {
                board.promote(color, Piece::Queen, mv.to);
            }
            let score = self.minimax(board, color.opponent(), depth - 1, alpha, beta);
            board.undo_move(mv);

            match color {
                Color::White => {
                    best = best.max(score);
                    alpha = alpha.max(best);
                }
                Color::Black => {
                    best = best.min(score);
                    beta = beta.min(best);
                }
            }
            if alpha >= beta {
                break;
            }
        }

        self.cache.store(key, depth, best);
        best
    }
}
