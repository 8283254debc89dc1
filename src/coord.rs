use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Number of ranks and files on the board.
pub const BOARD_SIZE: i16 = 8;

/// A board coordinate: `row` 0/7 are the back ranks, `col` 0/7 the edge files.
///
/// Values outside `0..BOARD_SIZE` are representable; the board treats them as
/// off-board squares.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i16,
    pub col: i16,
}

impl Coord {
    #[inline]
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Chebyshev distance to `other`: `max(|Δrow|, |Δcol|)`.
    #[inline]
    pub fn chebyshev(self, other: Coord) -> i16 {
        let d = other - self;
        d.row.abs().max(d.col.abs())
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.row - rhs.row, self.col - rhs.col)
    }
}

#[inline]
pub fn signum_i16(v: i16) -> i16 {
    if v > 0 {
        1
    } else if v < 0 {
        -1
    } else {
        0
    }
}
