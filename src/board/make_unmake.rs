//! Move application and reversal.
//!
//! `make_move` mutates the board and returns an `UnmakeInfo` delta record;
//! `unmake_move` consumes that record to restore the previous position
//! bitwise, hash included. Every make must be paired with exactly one
//! unmake on the same control path.

use crate::zobrist::ZOBRIST;

use super::state::{Board, UnmakeInfo};
use super::types::{Color, Move, Piece, Square};

impl Board {
    /// Recompute the Zobrist hash from scratch.
    ///
    /// Used at initialization and by tests to cross-check the
    /// incrementally maintained hash.
    #[must_use]
    pub fn calculate_hash(&self) -> u64 {
        let mut hash: u64 = 0;

        for sq_idx in 0..64 {
            let sq = Square::from_index(sq_idx);
            if let Some((color, piece)) = self.piece_at(sq) {
                hash ^= ZOBRIST.piece_keys[piece.index()][color.index()][sq_idx];
            }
        }

        if !self.white_to_move {
            hash ^= ZOBRIST.black_to_move_key;
        }

        for color in Color::BOTH {
            if self.castling_rights.has(color, true) {
                hash ^= ZOBRIST.castling_keys[color.index()][0];
            }
            if self.castling_rights.has(color, false) {
                hash ^= ZOBRIST.castling_keys[color.index()][1];
            }
        }

        if let Some(ep_square) = self.en_passant_target {
            hash ^= ZOBRIST.en_passant_keys[ep_square.file()];
        }

        hash
    }

    /// Clear one castling right if it is still set, folding the key
    /// transition into the hash.
    fn erode_castling_right(&mut self, color: Color, kingside: bool, hash: &mut u64) {
        if self.castling_rights.has(color, kingside) {
            let side_idx = usize::from(!kingside);
            *hash ^= ZOBRIST.castling_keys[color.index()][side_idx];
            self.castling_rights.remove(color, kingside);
        }
    }

    /// Apply a move produced by the move generator.
    ///
    /// Returns the delta record needed by `unmake_move`. The move must be
    /// pseudo-legal for the side to move; anything else corrupts the
    /// position.
    pub fn make_move(&mut self, m: Move) -> UnmakeInfo {
        let previous_hash = self.hash;
        let mut current_hash = self.hash;

        let color = self.side_to_move();
        let previous_en_passant_target = self.en_passant_target;
        let previous_castling_rights = self.castling_rights;

        current_hash ^= ZOBRIST.black_to_move_key;

        if let Some(old_ep) = self.en_passant_target {
            current_hash ^= ZOBRIST.en_passant_keys[old_ep.file()];
        }

        let from = m.from();
        let to = m.to();

        let mut captured_piece_info: Option<(Color, Piece)> = None;

        if m.is_en_passant() {
            // The captured pawn sits behind the target square
            let capture_rank = if color == Color::White {
                to.rank() - 1
            } else {
                to.rank() + 1
            };
            let capture_sq = Square::new(capture_rank, to.file());
            captured_piece_info = self.piece_at(capture_sq);
            if let Some((cap_col, cap_piece)) = captured_piece_info {
                self.remove_piece(capture_sq, cap_col, cap_piece);
                current_hash ^= ZOBRIST.piece_keys[cap_piece.index()][cap_col.index()]
                    [capture_sq.as_index()];
            }
        } else if !m.is_castling() {
            captured_piece_info = self.piece_at(to);
            if let Some((cap_col, cap_piece)) = captured_piece_info {
                self.remove_piece(to, cap_col, cap_piece);
                current_hash ^=
                    ZOBRIST.piece_keys[cap_piece.index()][cap_col.index()][to.as_index()];
            }
        }

        let (moving_color, moving_piece) = self.piece_at(from).expect("make_move 'from' empty");

        current_hash ^=
            ZOBRIST.piece_keys[moving_piece.index()][moving_color.index()][from.as_index()];
        self.remove_piece(from, moving_color, moving_piece);

        if m.is_castling() {
            self.set_piece(to, color, Piece::King);
            current_hash ^= ZOBRIST.piece_keys[Piece::King.index()][color.index()][to.as_index()];

            let (rook_from_f, rook_to_f) = if to.file() == 6 { (7, 5) } else { (0, 3) };
            let rook_from_sq = Square::new(to.rank(), rook_from_f);
            let rook_to_sq = Square::new(to.rank(), rook_to_f);
            let rook_info = self.piece_at(rook_from_sq).expect("castling without rook");
            self.remove_piece(rook_from_sq, rook_info.0, rook_info.1);
            self.set_piece(rook_to_sq, rook_info.0, rook_info.1);

            current_hash ^=
                ZOBRIST.piece_keys[Piece::Rook.index()][color.index()][rook_from_sq.as_index()];
            current_hash ^=
                ZOBRIST.piece_keys[Piece::Rook.index()][color.index()][rook_to_sq.as_index()];
        } else {
            let placed_piece = if m.is_promotion() {
                Piece::Queen
            } else {
                moving_piece
            };
            self.set_piece(to, color, placed_piece);
            current_hash ^= ZOBRIST.piece_keys[placed_piece.index()][color.index()][to.as_index()];
        }

        // New en passant target iff a pawn moved two ranks
        self.en_passant_target = None;
        if moving_piece == Piece::Pawn && from.rank().abs_diff(to.rank()) == 2 {
            let ep_sq = Square::new(usize::midpoint(from.rank(), to.rank()), from.file());
            self.en_passant_target = Some(ep_sq);
            current_hash ^= ZOBRIST.en_passant_keys[ep_sq.file()];
        }

        if moving_piece == Piece::King {
            self.erode_castling_right(color, true, &mut current_hash);
            self.erode_castling_right(color, false, &mut current_hash);
        } else if moving_piece == Piece::Rook {
            let home_rank = color.back_rank();
            if from == Square::new(home_rank, 0) {
                self.erode_castling_right(color, false, &mut current_hash);
            } else if from == Square::new(home_rank, 7) {
                self.erode_castling_right(color, true, &mut current_hash);
            }
        }

        // A rook captured on its home square erodes that side's right too
        if let Some((captured_color, captured_piece)) = captured_piece_info {
            if captured_piece == Piece::Rook {
                let home_rank = captured_color.back_rank();
                if to == Square::new(home_rank, 0) {
                    self.erode_castling_right(captured_color, false, &mut current_hash);
                } else if to == Square::new(home_rank, 7) {
                    self.erode_castling_right(captured_color, true, &mut current_hash);
                }
            }
        }

        self.white_to_move = !self.white_to_move;
        self.hash = current_hash;

        debug_assert!(self.aggregates_consistent(), "aggregate mismatch after make");

        UnmakeInfo {
            captured_piece_info,
            previous_en_passant_target,
            previous_castling_rights,
            previous_hash,
        }
    }

    /// Reverse the most recent `make_move`, restoring the position bitwise.
    pub fn unmake_move(&mut self, m: Move, info: UnmakeInfo) {
        self.white_to_move = !self.white_to_move;
        self.en_passant_target = info.previous_en_passant_target;
        self.castling_rights = info.previous_castling_rights;
        self.hash = info.previous_hash;

        let color = self.side_to_move();
        let from = m.from();
        let to = m.to();

        if m.is_castling() {
            self.remove_piece(to, color, Piece::King);
            self.set_piece(from, color, Piece::King);

            let (rook_orig_f, rook_moved_f) = if to.file() == 6 { (7, 5) } else { (0, 3) };
            let rook_sq = Square::new(to.rank(), rook_moved_f);
            let rook_info = self.piece_at(rook_sq).expect("unmake castling: rook missing");
            self.remove_piece(rook_sq, rook_info.0, rook_info.1);
            self.set_piece(Square::new(to.rank(), rook_orig_f), rook_info.0, rook_info.1);
        } else {
            let moved_piece_at_to = self.piece_at(to).expect("unmake move: 'to' square empty");
            self.remove_piece(to, moved_piece_at_to.0, moved_piece_at_to.1);

            // A promotion leaves a queen on 'to' but a pawn must return to 'from'
            let piece_on_from = if m.is_promotion() {
                Piece::Pawn
            } else {
                moved_piece_at_to.1
            };
            self.set_piece(from, color, piece_on_from);

            if m.is_en_passant() {
                let capture_rank = if color == Color::White {
                    to.rank() - 1
                } else {
                    to.rank() + 1
                };
                if let Some((cap_col, cap_piece)) = info.captured_piece_info {
                    self.set_piece(Square::new(capture_rank, to.file()), cap_col, cap_piece);
                }
            } else if let Some((cap_col, cap_piece)) = info.captured_piece_info {
                self.set_piece(to, cap_col, cap_piece);
            }
        }

        debug_assert!(
            self.aggregates_consistent(),
            "aggregate mismatch after unmake"
        );
    }
}
