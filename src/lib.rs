//! Chess rules engine: legal move generation, move application and
//! check/checkmate/stalemate detection for a standard 8x8 board.
//!
//! Castling, en passant and draw rules other than stalemate are not modelled.

pub mod board;
pub mod game;

pub use board::{Board, BoardBuilder, Color, Coordinate, Move, MoveList, Piece, PieceKind};
pub use game::{Game, GameSnapshot, GameStatus, InvalidMoveError};
