//! Game facade for move-source and renderer collaborators.
//!
//! Wraps a `Board` behind the small surface a terminal parser, GUI, or
//! network layer needs: apply a move (with a full error ladder), list
//! legal moves, snapshot the position, and query the terminal status.
//! The position is unchanged after any error return.

use crate::board::{Board, Color, Move, MoveError, MoveList, Piece, Square, UnmakeInfo};
use crate::search::{find_best_move, SearchState};

/// Outcome classification for a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// The side to move has at least one legal move
    Ongoing,
    /// The side to move is checkmated
    Checkmate { loser: Color },
    /// The side to move has no legal moves but is not in check
    Stalemate,
}

/// Read-only view of the position: piece-on-square for all 64 squares
/// plus the side to move. Renderers treat this as the single source of
/// truth between calls.
#[derive(Clone, Debug)]
pub struct Snapshot {
    squares: [Option<(Color, Piece)>; 64],
    side_to_move: Color,
}

impl Snapshot {
    /// The piece on a square, if any
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.as_index()]
    }

    /// The side to move
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }
}

/// A chess game: a board plus the history needed to undo applied moves.
pub struct Game {
    board: Board,
    history: Vec<(Move, UnmakeInfo)>,
}

impl Game {
    /// Start a game from the standard opening position.
    #[must_use]
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            history: Vec::new(),
        }
    }

    /// Start a game from an arbitrary position.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Game {
            board,
            history: Vec::new(),
        }
    }

    /// Read access to the underlying board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of plies played so far.
    #[must_use]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Parse and apply a move in `"e2 e4"` notation: from-square, space,
    /// to-square. Malformed input is reported distinctly from illegal
    /// moves.
    pub fn apply_move_text(&mut self, input: &str) -> Result<(), MoveError> {
        let malformed = || MoveError::InputMalformed {
            input: input.to_string(),
        };

        let (from_str, to_str) = input.split_once(' ').ok_or_else(malformed)?;
        let from: Square = from_str.parse().map_err(|_| malformed())?;
        let to: Square = to_str.parse().map_err(|_| malformed())?;

        self.apply_move(from, to)
    }

    /// Apply a move given as a from/to square pair.
    ///
    /// Promotions are implicit: a pawn reaching the back rank becomes a
    /// queen. Errors, in precedence order: `Terminal`, `NoPiece`,
    /// `WrongColor`, `IllegalGeometry`, `LeavesKingInCheck`.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<(), MoveError> {
        if self.terminal_status() != GameStatus::Ongoing {
            return Err(MoveError::Terminal);
        }

        let mover = self.board.side_to_move();
        match self.board.piece_at(from) {
            None => return Err(MoveError::NoPiece { square: from }),
            Some((color, _)) if color != mover => {
                return Err(MoveError::WrongColor { square: from });
            }
            Some(_) => {}
        }

        let legal_moves = self.board.generate_moves();
        if let Some(mv) = legal_moves.find(from, to) {
            let info = self.board.make_move(mv);
            self.history.push((mv, info));
            return Ok(());
        }

        // Distinguish a geometry failure from a king-safety rejection
        let pseudo_moves = self.board.generate_pseudo_moves();
        if pseudo_moves.find(from, to).is_some() {
            Err(MoveError::LeavesKingInCheck { from, to })
        } else {
            Err(MoveError::IllegalGeometry { from, to })
        }
    }

    /// All legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&mut self) -> MoveList {
        self.board.generate_moves()
    }

    /// A read-only view of the position for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let mut squares = [None; 64];
        for (idx, slot) in squares.iter_mut().enumerate() {
            *slot = self.board.piece_at(Square::from_index(idx));
        }
        Snapshot {
            squares,
            side_to_move: self.board.side_to_move(),
        }
    }

    /// Classify the position: ongoing, checkmate, or stalemate.
    #[must_use]
    pub fn terminal_status(&mut self) -> GameStatus {
        let side = self.board.side_to_move();
        if !self.board.generate_moves().is_empty() {
            return GameStatus::Ongoing;
        }
        if self.board.is_in_check(side) {
            GameStatus::Checkmate { loser: side }
        } else {
            GameStatus::Stalemate
        }
    }

    /// Take back the most recently applied move. Returns false when no
    /// moves have been played.
    pub fn undo(&mut self) -> bool {
        if let Some((mv, info)) = self.history.pop() {
            self.board.unmake_move(mv, info);
            true
        } else {
            false
        }
    }

    /// Ask the engine for the best move at the given depth, without
    /// applying it.
    pub fn search_best_move(&mut self, state: &mut SearchState, depth: u32) -> Option<Move> {
        find_best_move(&mut self.board, state, depth)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(notation: &str) -> Square {
        notation.parse().expect("valid square")
    }

    #[test]
    fn test_apply_move_text_ok() {
        let mut game = Game::new();
        game.apply_move_text("e2 e4").unwrap();
        assert_eq!(
            game.board().piece_at(sq("e4")),
            Some((Color::White, Piece::Pawn))
        );
        assert_eq!(game.board().side_to_move(), Color::Black);
        assert_eq!(game.ply(), 1);
    }

    #[test]
    fn test_malformed_input_variants() {
        let mut game = Game::new();
        for input in ["e2e4", "e2  e4", "e9 e4", "i2 e4", "e2 ", "", "e2 e4 e5"] {
            let err = game.apply_move_text(input).unwrap_err();
            assert!(
                matches!(err, MoveError::InputMalformed { .. }),
                "input {input:?} gave {err:?}"
            );
        }
        // The board must be untouched
        assert_eq!(game.board().side_to_move(), Color::White);
        assert_eq!(game.ply(), 0);
    }

    #[test]
    fn test_error_ladder() {
        let mut game = Game::new();

        assert!(matches!(
            game.apply_move(sq("e4"), sq("e5")),
            Err(MoveError::NoPiece { .. })
        ));
        assert!(matches!(
            game.apply_move(sq("e7"), sq("e5")),
            Err(MoveError::WrongColor { .. })
        ));
        assert!(matches!(
            game.apply_move(sq("b1"), sq("b3")),
            Err(MoveError::IllegalGeometry { .. })
        ));
    }

    #[test]
    fn test_leaves_king_in_check_detected() {
        let mut game = Game::new();
        // Expose the e1 king to the h4 queen, then try to move the pinned pawn
        game.apply_move_text("e2 e4").unwrap();
        game.apply_move_text("e7 e6").unwrap();
        game.apply_move_text("f2 f4").unwrap();
        game.apply_move_text("d8 h4").unwrap();
        // d2-d3 ignores the check entirely
        let err = game.apply_move_text("d2 d3").unwrap_err();
        assert!(matches!(err, MoveError::LeavesKingInCheck { .. }));
        // Blocking the diagonal with g2-g3 is fine
        game.apply_move_text("g2 g3").unwrap();
    }

    #[test]
    fn test_snapshot_matches_board() {
        let mut game = Game::new();
        game.apply_move_text("g1 f3").unwrap();
        let snap = game.snapshot();
        assert_eq!(snap.side_to_move(), Color::Black);
        assert_eq!(snap.piece_on(sq("f3")), Some((Color::White, Piece::Knight)));
        assert_eq!(snap.piece_on(sq("g1")), None);
    }

    #[test]
    fn test_undo_restores_position() {
        let mut game = Game::new();
        let initial_hash = game.board().hash();
        game.apply_move_text("e2 e4").unwrap();
        game.apply_move_text("c7 c5").unwrap();
        assert!(game.undo());
        assert!(game.undo());
        assert!(!game.undo());
        assert_eq!(game.board().hash(), initial_hash);
        assert_eq!(game.ply(), 0);
    }

    #[test]
    fn test_status_ongoing_at_start() {
        let mut game = Game::new();
        assert_eq!(game.terminal_status(), GameStatus::Ongoing);
    }
}
