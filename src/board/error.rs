//! Error types for board and game operations.

use std::fmt;

use super::{Color, Square};

/// Error type for rejected move attempts.
///
/// A rejected attempt never changes the game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The source square is empty
    NoPieceAt { square: Square },
    /// The piece on the source square belongs to the side not on move
    WrongSide { square: Square, color: Color },
    /// The destination is not among the piece's legal moves
    IllegalDestination { from: Square, to: Square },
    /// The game already ended in checkmate or stalemate
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPieceAt { square } => write!(f, "No piece on {square}"),
            MoveError::WrongSide { square, color } => {
                write!(f, "Piece on {square} belongs to {color}, who is not on move")
            }
            MoveError::IllegalDestination { from, to } => {
                write!(f, "Illegal move {from}{to}")
            }
            MoveError::GameOver => write!(f, "The game is over"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for piece-placement (FEN) parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Placement string is empty
    Empty,
    /// Invalid piece character in placement string
    InvalidPiece { char: char },
    /// Placement does not describe exactly 8 ranks
    WrongRankCount { found: usize },
    /// A rank does not describe exactly 8 files
    WrongFileCount { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// A game position needs both kings
    MissingKing { color: Color },
    /// The side not on move is already in check, so its king could be taken
    OpponentInCheck { color: Color },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "Empty placement string"),
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN must have 8 ranks, found {found}")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::MissingKing { color } => write!(f, "Position has no {color} king"),
            FenError::OpponentInCheck { color } => {
                write!(f, "{color} is in check but not on move")
            }
        }
    }
}

impl std::error::Error for FenError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_no_piece() {
        let err = MoveError::NoPieceAt {
            square: Square(4, 4),
        };
        assert!(err.to_string().contains("e4"));
    }

    #[test]
    fn test_move_error_wrong_side() {
        let err = MoveError::WrongSide {
            square: Square(1, 4),
            color: Color::Black,
        };
        assert!(err.to_string().contains("e7"));
        assert!(err.to_string().contains("Black"));
    }

    #[test]
    fn test_move_error_illegal_destination() {
        let err = MoveError::IllegalDestination {
            from: Square(6, 4),
            to: Square(3, 4),
        };
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_square_error_row_bounds() {
        let err = SquareError::RowOutOfBounds { row: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_fen_error_wrong_rank_count() {
        let err = FenError::WrongRankCount { found: 7 };
        assert!(err.to_string().contains('7'));
        assert!(err.to_string().contains('8'));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_opponent_in_check() {
        let err = FenError::OpponentInCheck {
            color: Color::Black,
        };
        assert!(err.to_string().contains("Black"));
    }

    #[test]
    fn test_error_clone() {
        let err = MoveError::GameOver;
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
