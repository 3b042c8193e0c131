//! End-to-end scenarios driven through the game facade.

use ferrochess::board::{Color, MoveError, Piece, Square};
use ferrochess::game::{Game, GameStatus};

fn sq(notation: &str) -> Square {
    notation.parse().expect("valid square")
}

#[test]
fn scenario_opening_pawn() {
    let mut game = Game::new();
    game.apply_move_text("e2 e4").unwrap();

    let snap = game.snapshot();
    assert_eq!(snap.piece_on(sq("e4")), Some((Color::White, Piece::Pawn)));
    assert_eq!(snap.piece_on(sq("e2")), None);
    assert_eq!(snap.side_to_move(), Color::Black);
    assert_eq!(game.board().en_passant_target(), Some(sq("e3")));
    assert!(!game.board().is_in_check(Color::White));
}

#[test]
fn scenario_illegal_knight_hop() {
    let mut game = Game::new();
    let before = game.snapshot();

    let err = game.apply_move_text("b1 b3").unwrap_err();
    assert!(matches!(err, MoveError::IllegalGeometry { .. }));

    // State unchanged
    let after = game.snapshot();
    for idx in 0..64 {
        let square = Square::from_index(idx);
        assert_eq!(before.piece_on(square), after.piece_on(square));
    }
    assert_eq!(after.side_to_move(), Color::White);
}

#[test]
fn scenario_blocked_bishop() {
    let mut game = Game::new();
    let err = game.apply_move_text("c1 h6").unwrap_err();
    assert!(matches!(err, MoveError::IllegalGeometry { .. }));
}

#[test]
fn scenario_fools_mate() {
    let mut game = Game::new();
    game.apply_move_text("f2 f3").unwrap();
    game.apply_move_text("e7 e5").unwrap();
    game.apply_move_text("g2 g4").unwrap();
    game.apply_move_text("d8 h4").unwrap();

    assert_eq!(
        game.terminal_status(),
        GameStatus::Checkmate {
            loser: Color::White
        }
    );

    // No further move may be applied
    let err = game.apply_move_text("a2 a3").unwrap_err();
    assert_eq!(err, MoveError::Terminal);
}

#[test]
fn scenario_en_passant_consume() {
    let mut game = Game::new();
    game.apply_move_text("e2 e4").unwrap();
    game.apply_move_text("a7 a6").unwrap();
    game.apply_move_text("e4 e5").unwrap();
    game.apply_move_text("d7 d5").unwrap();

    assert_eq!(game.board().en_passant_target(), Some(sq("d6")));
    game.apply_move_text("e5 d6").unwrap();

    let snap = game.snapshot();
    assert_eq!(snap.piece_on(sq("d6")), Some((Color::White, Piece::Pawn)));
    assert_eq!(snap.piece_on(sq("d5")), None, "captured pawn removed");
    assert_eq!(game.board().en_passant_target(), None);
}

#[test]
fn scenario_castle_kingside() {
    let mut game = Game::new();
    // Clear f1 and g1 without exposing the white king
    game.apply_move_text("g1 f3").unwrap();
    game.apply_move_text("b8 c6").unwrap();
    game.apply_move_text("e2 e3").unwrap();
    game.apply_move_text("e7 e6").unwrap();
    game.apply_move_text("f1 e2").unwrap();
    game.apply_move_text("g8 f6").unwrap();

    game.apply_move_text("e1 g1").unwrap();

    let snap = game.snapshot();
    assert_eq!(snap.piece_on(sq("g1")), Some((Color::White, Piece::King)));
    assert_eq!(snap.piece_on(sq("f1")), Some((Color::White, Piece::Rook)));
    assert_eq!(snap.piece_on(sq("h1")), None);
    assert_eq!(snap.piece_on(sq("e1")), None);
    assert!(!game.board().castling_rights().has(Color::White, true));
    assert!(!game.board().castling_rights().has(Color::White, false));
}

#[test]
fn scenario_error_precedence() {
    let mut game = Game::new();

    // Empty square beats everything else
    assert!(matches!(
        game.apply_move(sq("e5"), sq("e6")),
        Err(MoveError::NoPiece { .. })
    ));
    // Opponent piece on the from square
    assert!(matches!(
        game.apply_move(sq("g8"), sq("f6")),
        Err(MoveError::WrongColor { .. })
    ));
    // Malformed text never reaches the board
    assert!(matches!(
        game.apply_move_text("e2-e4"),
        Err(MoveError::InputMalformed { .. })
    ));
}

#[test]
fn scenario_promotion_is_implicit_queen() {
    let mut game = Game::new();

    // March the h-pawn through to promotion on h8
    let line = [
        ("h2", "h4"),
        ("g7", "g5"),
        ("h4", "g5"),
        ("b8", "c6"),
        ("g5", "g6"),
        ("c6", "b8"),
        ("g6", "g7"),
        ("b8", "c6"),
        ("g7", "h8"),
    ];
    for (from, to) in line {
        game.apply_move(sq(from), sq(to)).unwrap();
    }

    assert_eq!(
        game.snapshot().piece_on(sq("h8")),
        Some((Color::White, Piece::Queen))
    );
}

#[test]
fn scenario_search_plays_full_game_segment() {
    use ferrochess::search::SearchState;

    let mut game = Game::new();
    let mut state = SearchState::new(8);

    for _ in 0..6 {
        if game.terminal_status() != GameStatus::Ongoing {
            break;
        }
        let best = game
            .search_best_move(&mut state, 2)
            .expect("ongoing position has a move");
        game.apply_move(best.from(), best.to()).unwrap();
    }

    // The game reached a playable middlegame state with both kings alive
    let snap = game.snapshot();
    let kings = (0..64)
        .map(Square::from_index)
        .filter(|s| matches!(snap.piece_on(*s), Some((_, Piece::King))))
        .count();
    assert_eq!(kings, 2);
}
