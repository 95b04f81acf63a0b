//! Legality oracle: check, checkmate, stalemate, and the legal-move
//! filter.
//!
//! Simulation discipline: every `make_move` used for a legality test is
//! paired with an `undo_move` before returning, so callers observe an
//! unchanged board.

use super::attacks::between;
use super::state::Board;
use super::types::{Color, Move, MoveList, Piece};

impl Board {
    /// True when the king of `color` stands on a square attacked by the
    /// opposite color.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.attackers_of(self.king_mask(color), color.opponent()).any()
    }

    /// Checkmate analysis: in check, no king escape, the checker can
    /// neither be captured nor blocked.
    #[must_use]
    pub fn is_in_checkmate(&mut self, color: Color) -> bool {
        if !self.is_in_check(color) {
            return false;
        }

        let king = self.king_mask(color);
        let foe = color.opponent();

        // King escapes. Attack masks are recomputed with the king lifted
        // off its square, otherwise it would shield squares behind itself
        // on the checker's ray.
        self.set_piece(None, king);
        let mut escaped = false;
        for esc in self.escape_squares(king, color).bits() {
            if self.attackers_of(esc, foe).is_empty() {
                escaped = true;
                break;
            }
        }
        self.set_piece(Some((color, Piece::King)), king);
        if escaped {
            return false;
        }

        // Double check: no single capture or block resolves it, and the
        // king has nowhere to go.
        let checkers = self.attackers_of(king, foe);
        if checkers.popcount() >= 2 {
            return true;
        }

        // Capture the lone checker. Candidate capturers are exactly the
        // pieces attacking its square; each capture is vetted by
        // simulation in case the capturer is pinned.
        let checker = checkers;
        let victim = match self.piece_at(checker) {
            Some((_, piece)) => piece,
            None => return true,
        };
        for from in self.attackers_of(checker, color).bits() {
            let Some((_, piece)) = self.piece_at(from) else {
                continue;
            };
            let mv = Move::capture(color, piece, from, checker, victim);
            self.make_move(&mv);
            let resolved = !self.is_in_check(color);
            self.undo_move(&mv);
            if resolved {
                return false;
            }
        }

        // Block the checking ray. A knight gives no ray to block; between
        // is empty for it, as for any adjacent checker.
        for gap in between(king, checker).bits() {
            for from in self.blockers_to(gap, color).bits() {
                let Some((_, piece)) = self.piece_at(from) else {
                    continue;
                };
                let mv = Move::quiet(color, piece, from, gap);
                self.make_move(&mv);
                let resolved = !self.is_in_check(color);
                self.undo_move(&mv);
                if resolved {
                    return false;
                }
            }
        }

        true
    }

    /// Not in check, and no legal move exists.
    #[must_use]
    pub fn is_in_stalemate(&mut self, color: Color) -> bool {
        !self.is_in_check(color) && self.legal_moves(color).is_empty()
    }

    /// Checkmate or stalemate: the side to move has no continuation.
    #[must_use]
    pub fn is_game_over(&mut self, color: Color) -> bool {
        self.legal_moves(color).is_empty()
    }

    /// Candidate moves filtered by "the mover is not left in check". This
    /// is the definitive move enumerator consumed by the search and by
    /// callers validating entered moves.
    #[must_use]
    pub fn legal_moves(&mut self, color: Color) -> MoveList {
        let candidates = self.candidate_moves(color);
        let mut legal = MoveList::new();

        for mv in candidates.iter() {
            self.make_move(mv);
            if !self.is_in_check(color) {
                legal.push(*mv);
            }
            self.undo_move(mv);
        }

        legal
    }

    /// True when the move is a pawn push or capture onto the opponent's
    /// back rank, i.e. it triggers promotion.
    #[must_use]
    pub fn promotes(&self, mv: &Move) -> bool {
        mv.piece == Piece::Pawn && self.moving_to_promotion_rank(mv)
    }

    /// Count leaf nodes of the legal-move tree to the given depth, with
    /// `color` to move. Standard validation harness for the generator and
    /// the oracle together.
    pub fn perft(&mut self, color: Color, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves(color);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves.iter() {
            self.make_move(mv);
            nodes += self.perft(color.opponent(), depth - 1);
            self.undo_move(mv);
        }
        nodes
    }
}
