//! Square type and notation parsing.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareParseError;

/// One of the 64 board squares, packed as `rank * 8 + file`.
///
/// a1 is index 0, h1 is 7, and the index walks each rank westward to
/// eastward up to h8 at 63. The low three bits are therefore the file
/// and the high three the rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Pack a rank and file (both 0-7) into a square. Out-of-range
    /// coordinates silently alias other squares; `try_new` rejects them.
    #[inline]
    #[must_use]
    pub const fn new(rank: usize, file: usize) -> Self {
        Square(((rank << 3) | file) as u8)
    }

    /// Checked variant of `new`: `None` unless both coordinates are 0-7.
    #[must_use]
    pub const fn try_new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square::new(rank, file))
        } else {
            None
        }
    }

    /// Rank index, 0 (White's back rank) through 7.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        (self.0 >> 3) as usize
    }

    /// File index, 0 (the a-file) through 7.
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        (self.0 & 7) as usize
    }

    /// The packed 0-63 index, suitable for bitboard shifts and table
    /// lookups.
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 as usize
    }

    /// Rebuild a square from a packed 0-63 index.
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx as u8)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file_ch = char::from(b'a' + (self.0 & 7));
        let rank_ch = char::from(b'1' + (self.0 >> 3));
        write!(f, "{file_ch}{rank_ch}")
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => {
                Ok(Square((*rank - b'1') << 3 | (*file - b'a')))
            }
            _ => Err(SquareParseError {
                text: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_index_layout() {
        assert_eq!(Square::new(0, 0).as_index(), 0); // a1
        assert_eq!(Square::new(0, 7).as_index(), 7); // h1
        assert_eq!(Square::new(7, 0).as_index(), 56); // a8
        assert_eq!(Square::new(7, 7).as_index(), 63); // h8
        assert_eq!(Square::new(3, 4).as_index(), 28); // e4
    }

    #[test]
    fn test_square_rank_file() {
        let sq = Square::from_index(28); // e4
        assert_eq!(sq.rank(), 3);
        assert_eq!(sq.file(), 4);
    }

    #[test]
    fn test_square_try_new_bounds() {
        assert!(Square::try_new(7, 7).is_some());
        assert!(Square::try_new(8, 0).is_none());
        assert!(Square::try_new(0, 8).is_none());
    }

    #[test]
    fn test_square_display() {
        assert_eq!(Square::new(0, 0).to_string(), "a1");
        assert_eq!(Square::new(3, 4).to_string(), "e4");
        assert_eq!(Square::new(7, 7).to_string(), "h8");
    }

    #[test]
    fn test_square_from_str() {
        assert_eq!("e4".parse::<Square>(), Ok(Square::new(3, 4)));
        assert_eq!("a1".parse::<Square>(), Ok(Square::new(0, 0)));
        assert_eq!("h8".parse::<Square>(), Ok(Square::new(7, 7)));
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("e44".parse::<Square>().is_err());
        assert!("E4".parse::<Square>().is_err());
        assert!("".parse::<Square>().is_err());
    }

    #[test]
    fn test_parse_error_carries_input() {
        let err = "??".parse::<Square>().unwrap_err();
        assert_eq!(err.text, "??");
    }

    #[test]
    fn test_display_parse_round_trip() {
        for idx in 0..64 {
            let sq = Square::from_index(idx);
            assert_eq!(sq.to_string().parse::<Square>(), Ok(sq));
        }
    }
}
