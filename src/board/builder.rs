//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing placement strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .piece(Square(6, 0), Color::White, Piece::Pawn)
//!     .build();
//! assert_eq!(board.piece_count(), 3);
//! ```

use super::{Board, Color, ColoredPiece, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, ColoredPiece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            pieces: Board::new().pieces().collect(),
        }
    }

    /// Place a piece on the board.
    ///
    /// Pawns placed off their home row are marked as moved, so they never
    /// get the two-square advance.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, piece: Piece) -> Self {
        let mut placed = ColoredPiece::new(color, piece);
        placed.has_moved = piece == Piece::Pawn && square.row() != color.pawn_home_row();
        self.placed(square, placed)
    }

    /// Place a piece with an explicit `has_moved` flag.
    #[must_use]
    pub fn placed(mut self, square: Square, piece: ColoredPiece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.set_piece(square, piece);
        }
        board
    }
}
