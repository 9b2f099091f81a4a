//! Core chess types.
//!
//! - `Color`, `PieceKind` and `Piece` - who owns a piece and what it is
//! - `Coordinate` - a (row, column) square in `1..=8`
//! - `Move` and `MoveList` - move representation

mod coordinate;
mod moves;
mod piece;

pub use coordinate::Coordinate;
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PieceKind, PROMOTION_KINDS};
