//! Board representation and per-piece move rules.
//!
//! The board is pure storage: an 8x8 grid of optional pieces with no rule
//! knowledge. Piece move rules produce pseudo-legal moves from a board
//! snapshot and a square; they never mutate the board.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Coordinate};
//!
//! let board = Board::standard();
//! let moves = board.pseudo_legal_moves(Coordinate::at(1, 2)).unwrap();
//! assert_eq!(moves.len(), 2);
//! ```

mod attack_tables;
mod builder;
mod display;
mod error;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
pub(crate) mod tests;

pub use builder::BoardBuilder;
pub use error::{CoordinateError, SnapshotError};
pub use state::Board;
pub use types::{
    Color, Coordinate, Move, MoveList, MoveListIntoIter, Piece, PieceKind, PROMOTION_KINDS,
};
