use super::super::{Board, ColoredPiece, Square};

const CAPTURE_SIDES: [isize; 2] = [-1, 1];

impl Board {
    /// One step forward onto an empty square, two from an unmoved pawn when
    /// both squares are empty, and diagonal steps onto enemy pieces.
    pub(crate) fn generate_pawn_moves(&self, from: Square, pawn: ColoredPiece, moves: &mut Vec<Square>) {
        let dir = pawn.color.pawn_direction();

        if let Some(single) = from.offset(dir, 0) {
            if self.is_empty(single) {
                moves.push(single);
                if !pawn.has_moved {
                    if let Some(double) = from.offset(2 * dir, 0) {
                        if self.is_empty(double) {
                            moves.push(double);
                        }
                    }
                }
            }
        }

        for side in CAPTURE_SIDES {
            if let Some(target) = from.offset(dir, side) {
                if self.color_on(target) == Some(pawn.color.opponent()) {
                    moves.push(target);
                }
            }
        }
    }

    /// Both forward diagonals, whatever stands on them.
    pub(crate) fn pawn_attack_squares(&self, from: Square, pawn: ColoredPiece, attacks: &mut Vec<Square>) {
        let dir = pawn.color.pawn_direction();
        attacks.extend(
            CAPTURE_SIDES
                .iter()
                .filter_map(|&side| from.offset(dir, side)),
        );
    }
}
