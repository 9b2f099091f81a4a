//! The game state machine.
//!
//! A [`Game`] owns the authoritative board and the side to move. Legal moves
//! are pseudo-legal moves that survive a self-check simulation on a scratch
//! copy of the board. Check, checkmate and stalemate are derived on demand
//! from the board and a color, never stored.
//!
//! # Example
//! ```
//! use chess_rules::{Color, Coordinate, Game, Move};
//!
//! let mut game = Game::new();
//! let e4 = Move::new(Coordinate::at(2, 5), Coordinate::at(4, 5));
//! game.make_move(e4).unwrap();
//! assert_eq!(game.turn(), Color::Black);
//! ```

mod error;
mod rules;
mod snapshot;

#[cfg(test)]
mod tests;

pub use error::InvalidMoveError;
pub use rules::GameStatus;
pub use snapshot::GameSnapshot;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color};

/// A board plus the color to move.
///
/// One instance per match; nothing here is shared or locked.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "GameSnapshot", try_from = "GameSnapshot")
)]
pub struct Game {
    board: Board,
    turn: Color,
}

impl Game {
    /// Standard starting position, White to move
    #[must_use]
    pub fn new() -> Self {
        Game {
            board: Board::standard(),
            turn: Color::White,
        }
    }

    /// A game over a custom position.
    ///
    /// The board is not validated: each color should have exactly one king,
    /// otherwise check detection is meaningless.
    #[must_use]
    pub fn from_board(board: Board, turn: Color) -> Self {
        Game { board, turn }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the board wholesale. The turn is left as it was.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
