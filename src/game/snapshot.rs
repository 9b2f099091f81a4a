#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Game;
use crate::board::{Board, Color, Piece, SnapshotError};

/// Everything needed to rebuild a [`Game`]: the 64 squares in row-major order
/// (row 1 first, column 1 first) and the color to move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameSnapshot {
    pub squares: Vec<Option<Piece>>,
    pub turn: Color,
}

impl Game {
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            squares: self.board.squares().map(|(_, p)| p).collect(),
            turn: self.turn,
        }
    }

    pub fn from_snapshot(snapshot: &GameSnapshot) -> Result<Game, SnapshotError> {
        let board = Board::from_squares(&snapshot.squares)?;
        Ok(Game::from_board(board, snapshot.turn))
    }
}

impl From<Game> for GameSnapshot {
    fn from(game: Game) -> Self {
        game.snapshot()
    }
}

impl TryFrom<GameSnapshot> for Game {
    type Error = SnapshotError;

    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        Game::from_snapshot(&snapshot)
    }
}
