//! Bitboard chess engine library.
//!
//! Provides a complete chess core with:
//! - Bitboard-based board representation with make/unmake
//! - Legal move generation (castling, en passant, queen promotion)
//! - Alpha-beta search with a Zobrist-keyed transposition table
//! - A small game facade for terminal or GUI front ends
//!
//! # Quick Start
//!
//! ```
//! use ferrochess::board::Board;
//! use ferrochess::search::{find_best_move, SearchState, DEFAULT_TT_MB};
//!
//! // Create a new game from the starting position
//! let mut board = Board::new();
//!
//! // Generate all legal moves
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//!
//! // Find the best move (depth 3)
//! let mut state = SearchState::new(DEFAULT_TT_MB);
//! let best = find_best_move(&mut board, &mut state, 3);
//! assert!(best.is_some());
//! ```
//!
//! # Driving a game
//!
//! ```
//! use ferrochess::game::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! game.apply_move_text("e2 e4").unwrap();
//! game.apply_move_text("e7 e5").unwrap();
//! assert_eq!(game.terminal_status(), GameStatus::Ongoing);
//! ```
//!
//! # Building Positions
//!
//! ```
//! use ferrochess::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::new(0, 4), Color::White, Piece::King)
//!     .piece(Square::new(7, 4), Color::Black, Piece::King)
//!     .piece(Square::new(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert!(board.white_to_move());
//! ```
//!
//! # Features
//!
//! - `serde` - Enable serialization for `Piece`, `Color`, `Square`, `Move`,
//!   and `CastlingRights`

// Enable pedantic lints with sensible domain-specific exceptions
#![warn(clippy::pedantic)]
// Bitboard hex literals are clearer without separators (bit patterns visible)
#![allow(clippy::unreadable_literal)]
// Index casts are ubiquitous and safe in chess (board indices, square indices)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Large arrays are needed for move lists and attack tables
#![allow(clippy::large_stack_arrays)]
// Module-level documentation is sufficient for this codebase
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod board;
pub mod game;
pub mod search;
pub mod tt;
pub mod zobrist;
