//! Errors raised by [`Game::make_move`](super::Game::make_move).

use std::fmt;

use crate::board::{Color, Coordinate, Move};

/// Why a move was refused. The game is left untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidMoveError {
    /// The origin square is empty
    NoPieceAtOrigin { from: Coordinate },
    /// The piece on the origin belongs to the side not on move
    NotYourTurn {
        from: Coordinate,
        piece_color: Color,
        turn: Color,
    },
    /// The move is not among the legal moves of the piece
    IllegalMove { mv: Move },
}

impl fmt::Display for InvalidMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMoveError::NoPieceAtOrigin { from } => {
                write!(f, "No piece at {from}")
            }
            InvalidMoveError::NotYourTurn {
                from,
                piece_color,
                turn,
            } => {
                write!(
                    f,
                    "Piece at {from} is {piece_color}, but it is {turn}'s turn"
                )
            }
            InvalidMoveError::IllegalMove { mv } => {
                write!(f, "Illegal move {mv}")
            }
        }
    }
}

impl std::error::Error for InvalidMoveError {}
