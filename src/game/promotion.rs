//! Promotion choice collaborator.
//!
//! When a pawn reaches the last rank, `Game::attempt_move` stops and asks a
//! `PromotionChooser` which piece to put there. Nothing else can run on the
//! game until the chooser returns. Any answer other than a queen, rook,
//! bishop or knight resolves to a queen.

use crate::board::{Color, Piece, Square};

pub trait PromotionChooser {
    /// Pick a piece for the `color` pawn that just reached `square`.
    fn choose_promotion(&mut self, color: Color, square: Square) -> Option<Piece>;
}

/// Always answers queen.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutoQueen;

impl PromotionChooser for AutoQueen {
    fn choose_promotion(&mut self, _color: Color, _square: Square) -> Option<Piece> {
        Some(Piece::Queen)
    }
}

/// Gives the same answer every time, valid or not.
#[derive(Clone, Copy, Debug)]
pub struct FixedChoice(pub Option<Piece>);

impl PromotionChooser for FixedChoice {
    fn choose_promotion(&mut self, _color: Color, _square: Square) -> Option<Piece> {
        self.0
    }
}

impl<F> PromotionChooser for F
where
    F: FnMut(Color, Square) -> Option<Piece>,
{
    fn choose_promotion(&mut self, color: Color, square: Square) -> Option<Piece> {
        self(color, square)
    }
}

/// Map a free-text answer (`"r"`, `"Rook"`, `" queen "`) to a piece.
///
/// Returns `None` for anything unrecognised, including `"king"` and `"pawn"`.
#[must_use]
pub fn parse_promotion_answer(answer: &str) -> Option<Piece> {
    let answer = answer.trim().to_ascii_lowercase();
    let piece = match answer.as_str() {
        "q" | "queen" => Piece::Queen,
        "r" | "rook" => Piece::Rook,
        "b" | "bishop" => Piece::Bishop,
        "n" | "knight" => Piece::Knight,
        _ => return None,
    };
    Some(piece)
}

/// Apply the queen default to whatever the chooser answered.
pub(crate) fn resolve_choice(answer: Option<Piece>) -> Piece {
    match answer {
        Some(piece) if piece.is_promotion_choice() => piece,
        _ => Piece::Queen,
    }
}
