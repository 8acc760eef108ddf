//! Board representation and the rules that act on it.
//!
//! An 8x8 grid of optional pieces with pseudo-legal and legal move
//! generation, check detection and checkmate/stalemate classification.
//! Castling and en passant are not part of these rules.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, Square};
//!
//! let board = Board::new();
//! let moves = board.all_legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! assert_eq!(board.legal_moves(Square(7, 6)).len(), 2);
//! ```

mod attacks;
mod builder;
mod display;
mod error;
mod fen;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, SquareError};
pub use fen::STARTING_PLACEMENT;
pub use state::Board;
pub use types::{Color, ColoredPiece, Move, Piece, Square, PROMOTION_PIECES};

pub(crate) use fen::parse_side_to_move;
