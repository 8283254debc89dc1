use crate::coord::{signum_i16, Coord, BOARD_SIZE};
use crate::geometry::Line;
use crate::pieces::{Color, Piece, PieceKind};
use serde::{Deserialize, Serialize};

/// File order of the non-pawn pieces on each back rank.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8×8 board of optional pieces plus the side to move.
///
/// Each cell owns its occupant; captures overwrite the destination cell and
/// the captured piece is discarded. `current_turn` alternates on every
/// successful move, but nothing ties the *moving* piece's color to it —
/// callers wanting turn order must check [`Board::current_turn`] themselves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    current_turn: Color,
}

impl Board {
    /// The standard initial position, white to move.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let pawn_row = color.pawn_rank() as usize;
            let back_row = color.back_rank() as usize;
            for col in 0..8 {
                board.grid[pawn_row][col] = Some(Piece::new(PieceKind::Pawn, color));
                board.grid[back_row][col] = Some(Piece::new(BACK_RANK_ORDER[col], color));
            }
        }
        board
    }

    /// A board with no pieces, white to move.
    pub fn empty() -> Self {
        Self {
            grid: [[None; 8]; 8],
            current_turn: Color::White,
        }
    }

    /// Puts `piece` on `at`, replacing any previous occupant.
    pub fn place(&mut self, at: Coord, piece: Piece) {
        assert!(at.in_bounds(), "place target {at:?} is off the board");
        self.grid[at.row as usize][at.col as usize] = Some(piece);
    }

    /// The piece at `(row, col)`, or `None` for an empty square.
    ///
    /// Out-of-range coordinates also return `None`; there is no distinct
    /// off-board signal.
    pub fn get_piece(&self, row: i16, col: i16) -> Option<Piece> {
        self.square(Coord::new(row, col))
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    #[inline]
    fn square(&self, at: Coord) -> Option<Piece> {
        if at.in_bounds() {
            self.grid[at.row as usize][at.col as usize]
        } else {
            None
        }
    }

    /// True iff moving the piece on `start` to `end` is legal for its kind.
    ///
    /// Rejections: `end` off the board, no piece on `start`, a same-color
    /// piece on `end`, or geometry the mover's kind does not allow. Sliding
    /// pieces are *not* checked for obstruction here; see
    /// [`Board::is_path_clear`].
    pub fn is_valid_move(&self, start: Coord, end: Coord) -> bool {
        if !end.in_bounds() {
            return false;
        }
        let piece = match self.square(start) {
            Some(p) => p,
            None => return false,
        };
        // A piece can never land on one of its own.
        if self.square(end).is_some_and(|target| target.color == piece.color) {
            return false;
        }

        let line = Line::between(start, end);

        match piece.kind {
            PieceKind::Bishop => line == Line::Diagonal,
            PieceKind::Rook => line.is_straight(),
            PieceKind::Queen => line.is_queen_line(),
            PieceKind::King => line.is_queen_line() && start.chebyshev(end) == 1,
            PieceKind::Knight => knight_move_ok(start, end),
            PieceKind::Pawn => self.pawn_move_ok(start, end, piece),
        }
    }

    fn pawn_move_ok(&self, start: Coord, end: Coord, piece: Piece) -> bool {
        let dir = piece.color.pawn_direction();
        let d = end - start;

        if d.col == 0 {
            // Straight advances only into empty squares.
            if d.row == dir {
                return self.square(end).is_none();
            }
            if !piece.has_moved && d.row == 2 * dir {
                let middle = Coord::new(start.row + dir, start.col);
                return self.square(middle).is_none() && self.square(end).is_none();
            }
            return false;
        }

        // Diagonal step only as a capture.
        if d.col.abs() == 1 && d.row == dir {
            return self.square(end).is_some();
        }

        false
    }

    /// Applies the move if legal; returns whether it was applied.
    ///
    /// On success the piece is relocated (a capture overwrites the destination
    /// cell), its `has_moved` flag is set and the turn flips. On failure the
    /// board is left untouched.
    pub fn make_move(&mut self, start: Coord, end: Coord) -> bool {
        if !self.is_valid_move(start, end) {
            return false;
        }

        // is_valid_move guarantees start is on the board and occupied.
        let mut piece = match self.grid[start.row as usize][start.col as usize].take() {
            Some(p) => p,
            None => return false,
        };
        piece.has_moved = true;
        self.grid[end.row as usize][end.col as usize] = Some(piece);

        self.current_turn = self.current_turn.other();
        true
    }

    /// True iff every square strictly between `start` and `end` is empty.
    ///
    /// `start` and `end` must lie on a shared rank, file or diagonal; the
    /// result is unspecified otherwise.
    pub fn is_path_clear(&self, start: Coord, end: Coord) -> bool {
        debug_assert!(
            start == end || Line::between(start, end) != Line::Other,
            "path scan requires colinear endpoints: {start:?} -> {end:?}"
        );

        let d = end - start;
        let step = Coord::new(signum_i16(d.row), signum_i16(d.col));
        if step == Coord::new(0, 0) {
            return true;
        }

        let mut cur = start + step;
        while cur != end {
            if self.square(cur).is_some() {
                return false;
            }
            cur = cur + step;
        }
        true
    }

    /// Iterates every occupied square with its piece, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        (0..BOARD_SIZE).flat_map(move |row| {
            (0..BOARD_SIZE).filter_map(move |col| {
                self.grid[row as usize][col as usize].map(|p| (Coord::new(row, col), p))
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn knight_move_ok(start: Coord, end: Coord) -> bool {
    let d = end - start;
    let (lo, hi) = if d.row.abs() <= d.col.abs() {
        (d.row.abs(), d.col.abs())
    } else {
        (d.col.abs(), d.row.abs())
    };
    (lo, hi) == (1, 2)
}
