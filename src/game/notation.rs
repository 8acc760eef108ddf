//! Move records and the move log.
//!
//! A record is the piece letter (empty for pawns, `N` for knights, otherwise
//! the initial of the piece name), the source square, an `x` if the
//! destination was occupied, the destination square, and `=<letter>` after a
//! promotion: `e2e4`, `Ng1f3`, `Qh5xf7`, `e7xd8=N`.
//!
//! White's moves open each numbered pair and carry the move number:
//! `1. e2e4`, `e7e5`, `2. Ng1f3`. In a log that Black opens, Black's first
//! move is move 1 on its own and White's reply opens move 2.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, Move, Piece};

/// Render one move. `piece` is the piece kind before any promotion.
#[must_use]
pub fn render_move(piece: Piece, mv: &Move) -> String {
    let mut text = String::with_capacity(8);
    text.push_str(piece.notation_letter());
    text.push_str(&mv.from().to_string());
    if mv.is_capture() {
        text.push('x');
    }
    text.push_str(&mv.to().to_string());
    if let Some(promo) = mv.promotion() {
        text.push('=');
        text.push_str(promo.notation_letter());
    }
    text
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub notation: String,
    pub color: Color,
    pub move_number: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn is_white_move(&self) -> bool {
        self.color == Color::White
    }
}

/// Log line: numbered for White, bare for Black.
impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_white_move() {
            write!(f, "{}. {}", self.move_number, self.notation)
        } else {
            f.write_str(&self.notation)
        }
    }
}

/// Ordered history of recorded moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveLog {
    records: Vec<MoveRecord>,
}

impl MoveLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render and append a move made by `color`.
    pub fn record(&mut self, piece: Piece, mv: &Move, color: Color) -> &MoveRecord {
        let move_number = self.next_move_number(color);
        self.records.push(MoveRecord {
            notation: render_move(piece, mv),
            color,
            move_number,
        });
        &self.records[self.records.len() - 1]
    }

    fn next_move_number(&self, color: Color) -> u32 {
        let made = self.records.iter().filter(|r| r.color == color).count() as u32;
        // When Black opens the log, move 1 is Black's alone and White's
        // replies start pair 2.
        let black_opened = self
            .records
            .first()
            .is_some_and(|r| r.color == Color::Black);
        match color {
            Color::White if black_opened => made + 2,
            Color::White | Color::Black => made + 1,
        }
    }

    #[must_use]
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Log lines in order, e.g. `["1. e2e4", "e7e5"]`.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.records.iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

/// Whole history on one line: `1. e2e4 e7e5 2. Bf1c4`.
impl fmt::Display for MoveLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.entries().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    #[test]
    fn test_pawn_move_has_no_letter() {
        let mv = Move::quiet(Square(6, 4), Square(4, 4));
        assert_eq!(render_move(Piece::Pawn, &mv), "e2e4");
    }

    #[test]
    fn test_knight_uses_n() {
        let mv = Move::quiet(Square(7, 6), Square(5, 5));
        assert_eq!(render_move(Piece::Knight, &mv), "Ng1f3");
    }

    #[test]
    fn test_capture_marker_before_destination() {
        let mv = Move::capture(Square(3, 7), Square(1, 5));
        assert_eq!(render_move(Piece::Queen, &mv), "Qh5xf7");
    }

    #[test]
    fn test_promotion_suffix() {
        let mv = Move::capture(Square(1, 4), Square(0, 3)).with_promotion(Piece::Knight);
        assert_eq!(render_move(Piece::Pawn, &mv), "e7xd8=N");
        let mv = Move::quiet(Square(6, 0), Square(7, 0)).with_promotion(Piece::Rook);
        assert_eq!(render_move(Piece::Pawn, &mv), "a2a1=R");
    }

    #[test]
    fn test_log_numbers_pairs() {
        let mut log = MoveLog::new();
        log.record(Piece::Pawn, &Move::quiet(Square(6, 4), Square(4, 4)), Color::White);
        log.record(Piece::Pawn, &Move::quiet(Square(1, 4), Square(3, 4)), Color::Black);
        let third = log
            .record(Piece::Bishop, &Move::quiet(Square(7, 5), Square(4, 2)), Color::White)
            .clone();

        assert_eq!(third.move_number, 2);
        assert!(third.is_white_move());
        assert_eq!(log.entries(), vec!["1. e2e4", "e7e5", "2. Bf1c4"]);
        assert_eq!(log.to_string(), "1. e2e4 e7e5 2. Bf1c4");
        assert_eq!(log.records()[1].move_number, 1);
    }

    #[test]
    fn test_black_first_starts_at_one() {
        let mut log = MoveLog::new();
        let first = log
            .record(Piece::King, &Move::quiet(Square(0, 4), Square(0, 5)), Color::Black)
            .clone();
        assert_eq!(first.move_number, 1);
        assert_eq!(first.to_string(), "Ke8f8");
    }

    #[test]
    fn test_black_first_pairs_stay_consistent() {
        let mut log = MoveLog::new();
        log.record(Piece::King, &Move::quiet(Square(0, 4), Square(0, 3)), Color::Black);
        log.record(Piece::King, &Move::quiet(Square(7, 4), Square(7, 3)), Color::White);
        log.record(Piece::King, &Move::quiet(Square(0, 3), Square(0, 4)), Color::Black);
        log.record(Piece::King, &Move::quiet(Square(7, 3), Square(7, 4)), Color::White);

        let numbers: Vec<u32> = log.records().iter().map(|r| r.move_number).collect();
        assert_eq!(numbers, vec![1, 2, 2, 3]);
        assert_eq!(
            log.entries(),
            vec!["Ke8d8", "2. Ke1d1", "Kd8e8", "3. Kd1e1"]
        );
    }
}
