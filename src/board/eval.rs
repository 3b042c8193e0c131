//! Static position evaluation: material plus center control.

use super::state::Board;
use super::types::{Bitboard, Color, Piece};

/// Bonus per own piece standing on one of the four central squares
const CENTER_CONTROL_BONUS: i32 = 20;

impl Board {
    /// Evaluate the position from White's perspective, in centipawns.
    ///
    /// Positive favors White. The search negates as needed for the side
    /// to move.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let mut score = 0;
        for color in Color::BOTH {
            let sign = color.sign();
            for piece in Piece::ALL {
                let count = self.pieces_of(color, piece).popcount() as i32;
                score += sign * piece.value() * count;
            }
            let center_count = self.occupied_by(color).and(Bitboard::CENTER).popcount() as i32;
            score += sign * CENTER_CONTROL_BONUS * center_count;
        }
        score
    }
}
