use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize, Display, EnumIter,
)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row direction a pawn of this color advances in.
    #[inline]
    pub fn pawn_direction(self) -> i16 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding this color's non-pawn pieces at the start of the game.
    #[inline]
    pub fn back_rank(self) -> i16 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row holding this color's pawns at the start of the game.
    #[inline]
    pub fn pawn_rank(self) -> i16 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }
}

/// A piece on the board.
///
/// `has_moved` starts false and is set the first time the piece is relocated
/// by a successful move; it gates the pawn's two-square initial advance.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }
}
