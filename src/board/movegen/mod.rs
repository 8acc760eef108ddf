//! Move generation and legality filtering.
//!
//! Two target sets are produced per piece:
//! - pseudo-legal destinations, which follow movement geometry and occupancy
//!   but ignore the mover's own king, and
//! - attack squares, used only by check detection. Pawns attack both forward
//!   diagonals unconditionally, and sliders include their first blocker
//!   whatever its color.
//!
//! Legal moves are pseudo-legal moves that survive a simulation on a cloned
//! board without leaving the mover in check.

mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Board, Color, ColoredPiece, Move, Piece, Square};

impl Board {
    /// Destinations for the piece on `from`, ignoring self-check.
    ///
    /// Empty when `from` is empty.
    #[must_use]
    pub fn pseudo_legal_moves(&self, from: Square) -> Vec<Square> {
        let mut moves = Vec::new();
        let Some(piece) = self.piece_at(from) else {
            return moves;
        };
        let color = piece.color;
        match piece.piece {
            Piece::Pawn => self.generate_pawn_moves(from, piece, &mut moves),
            Piece::Knight => self.generate_knight_moves(from, color, &mut moves),
            Piece::Bishop => self.generate_slider_moves(from, color, SliderType::Bishop, &mut moves),
            Piece::Rook => self.generate_slider_moves(from, color, SliderType::Rook, &mut moves),
            Piece::Queen => self.generate_slider_moves(from, color, SliderType::Queen, &mut moves),
            Piece::King => self.generate_king_moves(from, color, &mut moves),
        }
        moves
    }

    /// Squares the piece on `from` threatens, for check detection.
    #[must_use]
    pub fn attack_squares(&self, from: Square) -> Vec<Square> {
        let mut attacks = Vec::new();
        let Some(piece) = self.piece_at(from) else {
            return attacks;
        };
        match piece.piece {
            Piece::Pawn => self.pawn_attack_squares(from, piece, &mut attacks),
            Piece::Bishop => self.slider_attack_squares(from, SliderType::Bishop, &mut attacks),
            Piece::Rook => self.slider_attack_squares(from, SliderType::Rook, &mut attacks),
            Piece::Queen => self.slider_attack_squares(from, SliderType::Queen, &mut attacks),
            Piece::Knight => self.generate_knight_moves(from, piece.color, &mut attacks),
            Piece::King => self.generate_king_moves(from, piece.color, &mut attacks),
        }
        attacks
    }

    /// Pseudo-legal destinations that do not leave the mover's king attacked.
    ///
    /// Order follows the generator's direction/offset enumeration and carries
    /// no other meaning.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        self.pseudo_legal_moves(from)
            .into_iter()
            .filter(|&to| {
                let mut scratch = self.clone();
                scratch.relocate(from, to);
                !scratch.is_in_check(piece.color)
            })
            .collect()
    }

    /// Every legal move for `color`, with capture flags set from the current
    /// occupancy. Promotions are left unresolved.
    #[must_use]
    pub fn all_legal_moves(&self, color: Color) -> Vec<Move> {
        let origins: Vec<Square> = self.pieces_of(color).map(|(sq, _)| sq).collect();
        origins
            .into_iter()
            .flat_map(|from| {
                self.legal_moves(from)
                    .into_iter()
                    .map(move |to| Move::new(from, to, !self.is_empty(to)))
            })
            .collect()
    }

    /// Short-circuiting form of `!all_legal_moves(color).is_empty()`.
    #[must_use]
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        let origins: Vec<Square> = self.pieces_of(color).map(|(sq, _)| sq).collect();
        origins
            .into_iter()
            .any(|from| !self.legal_moves(from).is_empty())
    }

    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    /// Apply a move without any validation: relocate, promote if requested,
    /// and mark the piece as moved.
    pub fn apply_move(&mut self, mv: &Move) -> Option<ColoredPiece> {
        let captured = self.relocate(mv.from(), mv.to());
        if let Some(mut moved) = self.piece_at(mv.to()) {
            if let Some(promo) = mv.promotion() {
                moved.piece = promo;
            }
            moved.has_moved = true;
            self.set_piece(mv.to(), moved);
        }
        captured
    }

    /// Count leaf positions `depth` plies ahead with `color` to move.
    ///
    /// A pawn reaching the last rank counts once per destination, promoting
    /// to a queen.
    #[must_use]
    pub fn perft(&self, depth: usize, color: Color) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.all_legal_moves(color);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in &moves {
            let mut child = self.clone();
            let m = self.promote_if_needed(m);
            child.apply_move(&m);
            nodes += child.perft(depth - 1, color.opponent());
        }

        nodes
    }

    /// `m` with a queen promotion attached when it takes a pawn to its last
    /// rank; any other move is returned unchanged.
    pub(crate) fn promote_if_needed(&self, m: &Move) -> Move {
        match self.piece_at(m.from()) {
            Some(p) if p.piece == Piece::Pawn && m.to().row() == p.color.promotion_row() => {
                m.with_promotion(Piece::Queen)
            }
            _ => *m,
        }
    }
}
