//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `ColoredPiece` - a piece as it stands on the board
//! - `Square` - (row, col) board coordinate
//! - `Move` - an applied move

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Color, ColoredPiece, Piece, PROMOTION_PIECES};
pub use square::Square;
