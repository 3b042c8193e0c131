use super::super::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::state::Board;
use super::super::types::{Bitboard, MoveList, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl Board {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        slider: SliderType,
        moves: &mut MoveList,
    ) {
        let color = self.side_to_move();
        let own_occ = self.occupied_by(color).0;
        let from_idx = from.as_index();

        let targets_raw = match slider {
            SliderType::Bishop => bishop_attacks(from_idx, self.all_occupied.0),
            SliderType::Rook => rook_attacks(from_idx, self.all_occupied.0),
            SliderType::Queen => queen_attacks(from_idx, self.all_occupied.0),
        } & !own_occ;

        for to_sq in Bitboard(targets_raw).iter() {
            moves.push(self.create_move(from, to_sq, false, false, false, false));
        }
    }
}
