//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{Board, BoardBuilder, Color, ColoredPiece, Move, MoveError, Piece, Square};
pub use crate::game::{AutoQueen, Game, GameStatus, MoveOutcome, PromotionChooser};
