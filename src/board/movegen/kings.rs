use super::super::{Board, Color, Square};

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Board {
    // No castling: the king only ever steps one square.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut Vec<Square>) {
        self.generate_step_moves(from, color, &KING_OFFSETS, moves);
    }
}
