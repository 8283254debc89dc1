//! An 8×8 chess board with per-piece move-legality checking.
//!
//! The board validates a proposed move against the moving piece's movement
//! geometry and, on success, applies it and toggles the side to move. Check
//! detection, castling, en passant and promotion are out of scope.

pub mod board;
pub mod coord;
pub mod geometry;
pub mod pieces;
