use super::super::{Board, Color, Square};

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    pub(crate) const fn directions(self) -> &'static [(isize, isize)] {
        match self {
            SliderType::Bishop => &BISHOP_DIRECTIONS,
            SliderType::Rook => &ROOK_DIRECTIONS,
            SliderType::Queen => &QUEEN_DIRECTIONS,
        }
    }
}

impl Board {
    /// Walk each ray until the first occupied square. That square is a
    /// destination only when it holds an enemy piece.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
        moves: &mut Vec<Square>,
    ) {
        self.walk_rays(from, slider, |target, occupant| match occupant {
            None => moves.push(target),
            Some(other) if other != color => moves.push(target),
            Some(_) => {}
        });
    }

    /// Same rays, but the first blocker is attacked regardless of its color.
    pub(crate) fn slider_attack_squares(
        &self,
        from: Square,
        slider: SliderType,
        attacks: &mut Vec<Square>,
    ) {
        self.walk_rays(from, slider, |target, _| attacks.push(target));
    }

    fn walk_rays<F>(&self, from: Square, slider: SliderType, mut visit: F)
    where
        F: FnMut(Square, Option<Color>),
    {
        for &(d_row, d_col) in slider.directions() {
            let mut current = from;
            while let Some(next) = current.offset(d_row, d_col) {
                let occupant = self.color_on(next);
                visit(next, occupant);
                if occupant.is_some() {
                    break;
                }
                current = next;
            }
        }
    }
}
