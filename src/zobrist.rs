//! Zobrist hashing keys.
//!
//! One independent 64-bit random key per (piece, color, square), per
//! castling right, per en-passant file, plus one for the side to move.
//! The position hash is the XOR of the keys for every active feature and
//! is updated incrementally on every state mutation.

use once_cell::sync::Lazy;
use rand::Rng;

pub struct ZobristKeys {
    /// Indexed by [piece][color][square]
    pub piece_keys: [[[u64; 64]; 2]; 6],
    /// Indexed by [color][side], side 0 = kingside, 1 = queenside
    pub castling_keys: [[u64; 2]; 2],
    /// Indexed by en-passant file
    pub en_passant_keys: [u64; 8],
    /// XORed in when it is Black's move
    pub black_to_move_key: u64,
}

pub static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(|| {
    let mut rng = rand::thread_rng();

    let mut piece_keys = [[[0u64; 64]; 2]; 6];
    for piece in &mut piece_keys {
        for color in piece.iter_mut() {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }
    }

    let mut castling_keys = [[0u64; 2]; 2];
    for color in &mut castling_keys {
        for key in color.iter_mut() {
            *key = rng.gen();
        }
    }

    let mut en_passant_keys = [0u64; 8];
    for key in &mut en_passant_keys {
        *key = rng.gen();
    }

    ZobristKeys {
        piece_keys,
        castling_keys,
        en_passant_keys,
        black_to_move_key: rng.gen(),
    }
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_distinct() {
        let mut seen = HashSet::new();
        for piece in &ZOBRIST.piece_keys {
            for color in piece {
                for &key in color {
                    assert!(seen.insert(key), "duplicate piece key");
                }
            }
        }
        for color in &ZOBRIST.castling_keys {
            for &key in color {
                assert!(seen.insert(key), "duplicate castling key");
            }
        }
        for &key in &ZOBRIST.en_passant_keys {
            assert!(seen.insert(key), "duplicate en passant key");
        }
        assert!(seen.insert(ZOBRIST.black_to_move_key));
    }

    #[test]
    fn test_keys_stable_within_process() {
        let first = ZOBRIST.piece_keys[0][0][0];
        let second = ZOBRIST.piece_keys[0][0][0];
        assert_eq!(first, second);
    }
}
