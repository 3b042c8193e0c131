use super::state::Board;
use super::types::{Bitboard, Color, Piece};

#[cfg(debug_assertions)]
impl Board {
    /// Debug helper to print all bitboard values
    pub fn debug_bitboards(&self) {
        println!("Side to move: {}", self.side_to_move());
        if let Some(ep_target) = self.en_passant_target {
            println!("EP Target: {ep_target}");
        }
        println!("All occupied: {:#018x}", self.all_occupied.0);

        for color in Color::BOTH {
            for piece in Piece::ALL {
                let bb = self.pieces_of(color, piece).0;
                let name = piece.to_char().to_ascii_uppercase();
                println!("{color} {name}: {bb:#018x}");
            }
        }
        println!("------------------------------------");
    }

    pub fn print_bitboard_grid(&self, label: &str, bb: Bitboard) {
        println!("{} {:#018x}", label, bb.0);
        println!("  +---+---+---+---+---+---+---+---+");
        for rank in (0..8).rev() {
            print!("{} |", rank + 1);
            for file in 0..8 {
                let idx = rank * 8 + file;
                let ch = if (bb.0 >> idx) & 1 == 1 { '1' } else { '.' };
                print!(" {ch} |");
            }
            println!("\n  +---+---+---+---+---+---+---+---+");
        }
        println!("    a   b   c   d   e   f   g   h");
        println!("------------------------------------");
    }
}
