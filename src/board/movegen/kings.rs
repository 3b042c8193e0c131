use super::super::attack_tables::{
    bishop_attacks, rook_attacks, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS,
};
use super::super::state::Board;
use super::super::types::{Bitboard, Color, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move();
        let back_rank = color.back_rank();
        let own_occ = self.occupied_by(color).0;
        let targets = Bitboard(KING_ATTACKS[from.as_index()] & !own_occ);

        for to_sq in targets.iter() {
            moves.push(self.create_move(from, to_sq, false, false, false, false));
        }

        // Castling: rights intact, transit squares empty, rook still home.
        // Attack constraints on the king's path are screened by the
        // legality filter.
        if from == Square::new(back_rank, 4) {
            if self.castling_rights.has(color, true)
                && self.is_empty(Square::new(back_rank, 5))
                && self.is_empty(Square::new(back_rank, 6))
                && self.piece_at(Square::new(back_rank, 7)) == Some((color, Piece::Rook))
            {
                let to_sq = Square::new(back_rank, 6);
                moves.push(self.create_move(from, to_sq, false, true, false, false));
            }
            if self.castling_rights.has(color, false)
                && self.is_empty(Square::new(back_rank, 1))
                && self.is_empty(Square::new(back_rank, 2))
                && self.is_empty(Square::new(back_rank, 3))
                && self.piece_at(Square::new(back_rank, 0)) == Some((color, Piece::Rook))
            {
                let to_sq = Square::new(back_rank, 2);
                moves.push(self.create_move(from, to_sq, false, true, false, false));
            }
        }
    }

    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces[color.index()][Piece::King.index()].iter().next()
    }

    /// Attack oracle: is `square` attacked by any piece of `attacker_color`?
    ///
    /// Works backwards: the set of squares from which each piece kind would
    /// attack `square` is intersected with the attacker's pieces of that kind.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker_color: Color) -> bool {
        let target_idx = square.as_index();
        let c_idx = attacker_color.index();

        // A pawn of the attacker color attacks `square` exactly from the
        // squares a pawn of the *defending* color on `square` would attack.
        let pawn_sources = PAWN_ATTACKS[attacker_color.opponent().index()][target_idx];
        if self.pieces[c_idx][Piece::Pawn.index()].0 & pawn_sources != 0 {
            return true;
        }

        if self.pieces[c_idx][Piece::Knight.index()].0 & KNIGHT_ATTACKS[target_idx] != 0 {
            return true;
        }

        if self.pieces[c_idx][Piece::King.index()].0 & KING_ATTACKS[target_idx] != 0 {
            return true;
        }

        let rook_like =
            self.pieces[c_idx][Piece::Rook.index()].0 | self.pieces[c_idx][Piece::Queen.index()].0;
        let bishop_like = self.pieces[c_idx][Piece::Bishop.index()].0
            | self.pieces[c_idx][Piece::Queen.index()].0;

        if rook_attacks(target_idx, self.all_occupied.0) & rook_like != 0 {
            return true;
        }
        if bishop_attacks(target_idx, self.all_occupied.0) & bishop_like != 0 {
            return true;
        }

        false
    }

    /// Is the given color's king attacked?
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        if let Some(king_sq) = self.find_king(color) {
            self.is_square_attacked(king_sq, color.opponent())
        } else {
            false
        }
    }
}
