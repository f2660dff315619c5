//! Chess engine library with a bitboard board representation.
//!
//! Provides:
//! - Bitboard position model with precomputed attack tables
//! - Full legal move generation (castling, en passant, promotions)
//! - Reversible make/unmake with a board-owned undo stack
//! - Depth-limited negamax search with alpha-beta pruning
//! - FEN parsing/emission and UCI move handling
//!
//! # Quick Start
//!
//! ```
//! use sable::board::{find_best_move, Board};
//!
//! // Start a new game and list the opening moves.
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//!
//! // Pick a move for the side to move.
//! if let Some(best) = find_best_move(&mut board, 3) {
//!     println!("best move: {best}");
//! }
//! ```
//!
//! # Building Positions
//!
//! ```
//! use sable::board::{Board, BoardBuilder, Color, Piece, Square};
//!
//! // From FEN notation
//! let board = Board::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
//!
//! // Piece by piece
//! let board = BoardBuilder::new()
//!     .piece(Square::new(0, 4), Color::White, Piece::King)
//!     .piece(Square::new(7, 4), Color::Black, Piece::King)
//!     .piece(Square::new(1, 0), Color::White, Piece::Pawn)
//!     .build();
//! ```
//!
//! # Making Moves
//!
//! ```
//! use sable::board::Board;
//!
//! let mut board = Board::new();
//! board.make_move_uci("e2e4").unwrap();
//! board.make_move_uci("e7e5").unwrap();
//! assert!(!board.is_checkmate());
//!
//! // Moves unwind exactly.
//! board.unmake_move();
//! board.unmake_move();
//! assert_eq!(board.to_fen(), Board::new().to_fen());
//! ```
//!
//! # Features
//!
//! - `serde` - serialization for `Piece`, `Color`, `Square`, `Move`, and
//!   `CastlingRights`

// Enable pedantic lints with domain-specific exceptions
#![warn(clippy::pedantic)]
// Bitboard hex literals are clearer without separators (bit patterns visible)
#![allow(clippy::unreadable_literal)]
// Index casts are ubiquitous and safe here (square and board indices)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Module-level documentation is sufficient for this codebase
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod board;
pub mod uci;
