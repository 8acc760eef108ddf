use std::fmt;

use super::{Board, Square};

/// Text grid, rank 8 at the top, with Unicode glyphs and `.` for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                let glyph = self.piece_at(Square(row, col)).map_or('.', |p| p.glyph());
                write!(f, " {glyph}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl Board {
    /// Grid with the given squares marked `*` (or `x` when occupied), for
    /// showing where a selected piece may go.
    #[must_use]
    pub fn render_highlighted(&self, highlights: &[Square]) -> String {
        let mut out = String::new();
        for row in 0..8 {
            out.push_str(&format!("{} ", 8 - row));
            for col in 0..8 {
                let sq = Square(row, col);
                let mark = match (highlights.contains(&sq), self.piece_at(sq)) {
                    (true, Some(_)) => 'x',
                    (true, None) => '*',
                    (false, Some(p)) => p.glyph(),
                    (false, None) => '.',
                };
                out.push(' ');
                out.push(mark);
            }
            out.push('\n');
        }
        out.push_str("   a b c d e f g h");
        out
    }
}
