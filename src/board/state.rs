use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, ColoredPiece, Piece, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

static STARTING_BOARD: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for (col, piece) in BACK_RANK.iter().enumerate() {
        board.set_piece(Square(0, col), ColoredPiece::new(Color::Black, *piece));
        board.set_piece(Square(1, col), ColoredPiece::new(Color::Black, Piece::Pawn));
        board.set_piece(Square(6, col), ColoredPiece::new(Color::White, Piece::Pawn));
        board.set_piece(Square(7, col), ColoredPiece::new(Color::White, *piece));
    }
    board
});

/// The 8x8 grid. At most one piece per square.
///
/// `Clone` is a full value copy; legality simulation always works on a clone
/// and never touches the live board.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Option<ColoredPiece>; 8]; 8],
}

impl Board {
    /// The standard starting arrangement.
    pub fn new() -> Self {
        STARTING_BOARD.clone()
    }

    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// # Panics
    /// Panics if `square` is off the board (see [`Square::is_on_board`]).
    /// The same holds for every other accessor taking a `Square`.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<ColoredPiece> {
        self.squares[square.0][square.1]
    }

    /// Piece kind on a square, ignoring color.
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.piece_at(square).map(|p| p.piece)
    }

    #[inline]
    pub fn color_on(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|p| p.color)
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Place a piece, overwriting whatever stood there.
    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: ColoredPiece) {
        self.squares[square.0][square.1] = Some(piece);
    }

    /// Empty a square, returning its previous occupant.
    #[inline]
    pub fn clear(&mut self, square: Square) -> Option<ColoredPiece> {
        self.squares[square.0][square.1].take()
    }

    /// Move whatever stands on `from` onto `to`, returning the piece that was
    /// overwritten on `to`. No legality checks happen here.
    ///
    /// Relocating a square onto itself is a no-op.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<ColoredPiece> {
        if from == to {
            return None;
        }
        let moving = self.clear(from);
        let captured = self.squares[to.0][to.1].take();
        self.squares[to.0][to.1] = moving;
        captured
    }

    /// Every occupied square with its piece, row by row from a8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Occupied squares of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
