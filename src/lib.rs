pub mod board;
pub mod game;
pub mod shell;

pub use board::{Board, Color, Move, Piece, Square};
pub use game::{Game, MoveOutcome};
