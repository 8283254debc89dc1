use crate::coord::Coord;

/// Classification of the straight line through two squares.
///
/// This is the exact-integer replacement for a rise-over-run slope: `Vertical`
/// stands in for the "infinite slope" case, `Horizontal` for slope zero and
/// `Diagonal` for slope magnitude one. Anything else (including a zero-length
/// move) is `Other`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Line {
    Horizontal,
    Vertical,
    Diagonal,
    Other,
}

impl Line {
    pub fn between(start: Coord, end: Coord) -> Line {
        let d = end - start;
        if d.row == 0 && d.col != 0 {
            Line::Horizontal
        } else if d.col == 0 && d.row != 0 {
            Line::Vertical
        } else if d.row != 0 && d.row.abs() == d.col.abs() {
            Line::Diagonal
        } else {
            Line::Other
        }
    }

    /// Rank or file movement: what a rook is allowed.
    #[inline]
    pub fn is_straight(self) -> bool {
        matches!(self, Line::Horizontal | Line::Vertical)
    }

    /// Rank, file or diagonal movement: what a queen is allowed.
    #[inline]
    pub fn is_queen_line(self) -> bool {
        matches!(self, Line::Horizontal | Line::Vertical | Line::Diagonal)
    }
}
