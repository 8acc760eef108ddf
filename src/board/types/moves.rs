//! Move type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

/// A move as applied to the board.
///
/// `promotion` is set only when a pawn reached the last rank, and
/// `capture` records whether the destination was occupied when the move
/// was attempted.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<Piece>,
    capture: bool,
}

impl Move {
    /// Create a quiet move (no capture, no promotion)
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            capture: false,
        }
    }

    /// Create a capture move
    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            capture: true,
        }
    }

    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, capture: bool) -> Self {
        Move {
            from,
            to,
            promotion: None,
            capture,
        }
    }

    /// Same move, promoting to `piece`.
    #[inline]
    #[must_use]
    pub const fn with_promotion(self, piece: Piece) -> Self {
        Move {
            promotion: Some(piece),
            ..self
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn promotion(&self) -> Option<Piece> {
        self.promotion
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.capture
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }
}

/// Coordinate form: `e2e4`, `e7xd8=Q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.from)?;
        if self.capture {
            write!(f, "x")?;
        }
        write!(f, "{}", self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_accessors() {
        let mv = Move::capture(Square(1, 4), Square(0, 3)).with_promotion(Piece::Rook);
        assert_eq!(mv.from(), Square(1, 4));
        assert_eq!(mv.to(), Square(0, 3));
        assert!(mv.is_capture());
        assert_eq!(mv.promotion(), Some(Piece::Rook));
        assert_eq!(mv.to_string(), "e7xd8=R");
    }

    #[test]
    fn test_quiet_display() {
        let mv = Move::quiet(Square(6, 4), Square(4, 4));
        assert!(!mv.is_capture());
        assert!(!mv.is_promotion());
        assert_eq!(mv.to_string(), "e2e4");
    }
}
