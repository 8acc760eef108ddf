//! Check detection.
//!
//! Plain scans over the 64 squares; no incremental attack maps are kept.

use super::{Board, Color, Piece, Square};

impl Board {
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, p)| p.piece == Piece::King)
            .map(|(sq, _)| sq)
    }

    /// True if any piece of `attacker_color` has `square` among its attack squares.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker_color: Color) -> bool {
        self.pieces_of(attacker_color)
            .any(|(from, _)| self.attack_squares(from).contains(&square))
    }

    /// Squares holding `attacker_color` pieces that attack `square`.
    #[must_use]
    pub fn attackers_of(&self, square: Square, attacker_color: Color) -> Vec<Square> {
        self.pieces_of(attacker_color)
            .filter(|(from, _)| self.attack_squares(*from).contains(&square))
            .map(|(from, _)| from)
            .collect()
    }

    /// Whether `color`'s king stands on a square the opponent attacks.
    ///
    /// # Panics
    /// Panics if `color` has no king on the board. Kings are never captured
    /// under legal play, so a missing king means the position is corrupt.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king_sq) = self.find_king(color) else {
            panic!("{color} king is missing from the board");
        };
        self.is_square_attacked(king_sq, color.opponent())
    }
}
