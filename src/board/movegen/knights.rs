use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::state::Board;
use super::super::types::{Bitboard, MoveList, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move();
        let own_occ = self.occupied_by(color).0;
        let targets = Bitboard(KNIGHT_ATTACKS[from.as_index()] & !own_occ);

        for to_sq in targets.iter() {
            moves.push(self.create_move(from, to_sq, false, false, false, false));
        }
    }
}
