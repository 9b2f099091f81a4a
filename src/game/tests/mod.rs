//! Game module tests.
//!
//! - `legality.rs` - self-check filtering of pseudo-legal moves
//! - `status.rs` - check, checkmate and stalemate detection
//! - `make_move.rs` - authoritative move application and its failure modes
//! - `proptest.rs` - property-based tests over random playouts

mod legality;

use crate::board::tests::position;
use crate::board::{Color, Coordinate, Move};
use crate::game::Game;

pub(crate) fn game_with(pieces: &[(u8, u8, char)], turn: Color) -> Game {
    Game::from_board(position(pieces), turn)
}

pub(crate) fn mv(r1: u8, c1: u8, r2: u8, c2: u8) -> Move {
    Move::new(Coordinate::at(r1, c1), Coordinate::at(r2, c2))
}
