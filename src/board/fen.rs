//! Piece-placement strings (the first field of FEN).
//!
//! The first rank listed is rank 8, which is row 0 of the board, so ranks
//! map onto rows in reading order.

use super::error::FenError;
use super::{Board, BoardBuilder, Color, Piece, Square};

/// Placement of the standard starting arrangement.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// Parse a board from a placement string such as
    /// `"7k/5Q2/6K1/8/8/8/8/8"`. Extra whitespace-separated fields are ignored.
    ///
    /// Pawns off their home row are marked as moved.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut builder = BoardBuilder::new();
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= 8 {
                    return Err(FenError::WrongFileCount {
                        rank: 8 - row,
                        files: col + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                builder = builder.piece(Square(row, col), color, piece);
                col += 1;
            }
            if col != 8 {
                return Err(FenError::WrongFileCount {
                    rank: 8 - row,
                    files: col,
                });
            }
        }
        Ok(builder.build())
    }

    /// Placement string for this board.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut text = String::new();
            let mut empty = 0;
            for col in 0..8 {
                match self.piece_at(Square(row, col)) {
                    Some(p) => {
                        if empty > 0 {
                            text.push_str(&empty.to_string());
                            empty = 0;
                        }
                        text.push(p.piece.to_fen_char(p.color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }
        rows.join("/")
    }
}

/// Parse an optional side-to-move field (`w`/`b`); absent means White.
pub(crate) fn parse_side_to_move(fen: &str) -> Result<Color, FenError> {
    match fen.split_whitespace().nth(1) {
        None | Some("w") => Ok(Color::White),
        Some("b") => Ok(Color::Black),
        Some(other) => Err(FenError::InvalidSideToMove {
            found: other.to_string(),
        }),
    }
}
