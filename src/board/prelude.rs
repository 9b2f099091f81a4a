//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let game = Game::new();
//! assert_eq!(game.turn(), Color::White);
//! ```

pub use super::{Board, BoardBuilder, Color, Coordinate, Move, MoveList, Piece, PieceKind};
pub use crate::game::{Game, GameSnapshot, GameStatus, InvalidMoveError};
