use super::super::{Board, Color, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut Vec<Square>) {
        self.generate_step_moves(from, color, &KNIGHT_OFFSETS, moves);
    }

    /// Fixed-offset targets: on the board and not holding a friendly piece.
    pub(crate) fn generate_step_moves(
        &self,
        from: Square,
        color: Color,
        offsets: &[(isize, isize)],
        moves: &mut Vec<Square>,
    ) {
        moves.extend(
            offsets
                .iter()
                .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
                .filter(|&to| self.color_on(to) != Some(color)),
        );
    }
}
