//! Error types for chess board operations.

use std::fmt;

use super::types::Square;

/// A square string that does not name a board square.
///
/// Valid notation is a file letter `a`-`h` followed by a rank digit
/// `1`-`8`, nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareParseError {
    pub(crate) text: String,
}

impl fmt::Display for SquareParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a square (expected a file a-h and a rank 1-8)",
            self.text
        )
    }
}

impl std::error::Error for SquareParseError {}

/// Error type for move application failures.
///
/// Every variant is recoverable: the position is unchanged after any
/// error return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Move string fails the `"e2 e4"` format check
    InputMalformed { input: String },
    /// The from square is empty
    NoPiece { square: Square },
    /// The from square holds a piece of the wrong color
    WrongColor { square: Square },
    /// The piece on the from square cannot reach the destination
    IllegalGeometry { from: Square, to: Square },
    /// The move is geometrically valid but would leave the mover's king attacked
    LeavesKingInCheck { from: Square, to: Square },
    /// The game is already over; no move may be applied
    Terminal,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InputMalformed { input } => {
                write!(f, "Malformed move input '{input}', expected e.g. 'e2 e4'")
            }
            MoveError::NoPiece { square } => {
                write!(f, "No piece on {square}")
            }
            MoveError::WrongColor { square } => {
                write!(f, "Piece on {square} belongs to the opponent")
            }
            MoveError::IllegalGeometry { from, to } => {
                write!(f, "Piece on {from} cannot move to {to}")
            }
            MoveError::LeavesKingInCheck { from, to } => {
                write!(f, "Move {from} to {to} leaves the king in check")
            }
            MoveError::Terminal => {
                write!(f, "The game is already over")
            }
        }
    }
}

impl std::error::Error for MoveError {}

impl From<SquareParseError> for MoveError {
    fn from(err: SquareParseError) -> Self {
        MoveError::InputMalformed { input: err.text }
    }
}
