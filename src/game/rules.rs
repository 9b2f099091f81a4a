use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Game, InvalidMoveError};
use crate::board::{Color, Coordinate, Move, MoveList};

/// Derived status of one color in the current position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// Not in check and has a legal move
    Ongoing,
    /// In check with at least one legal move
    Check,
    /// In check with no legal move
    Checkmate,
    /// Not in check with no legal move
    Stalemate,
}

impl GameStatus {
    /// True for checkmate and stalemate
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate => write!(f, "checkmate"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Game {
    /// Legal moves for the piece on `from`.
    ///
    /// Returns `None` if the square is empty, otherwise the (possibly empty)
    /// list. The piece's own color is the mover, whoever's turn it is.
    #[must_use]
    pub fn legal_moves(&self, from: Coordinate) -> Option<MoveList> {
        let piece = self.board.piece_at(from)?;
        let mut moves = self.board.pseudo_legal_moves(from)?;
        moves.retain(|&mv| !self.board.exposes_own_king(mv, piece.color()));
        Some(moves)
    }

    /// Every legal move available to `color`, origin squares in row-major order
    #[must_use]
    pub fn all_legal_moves(&self, color: Color) -> Vec<Move> {
        self.board
            .pieces(color)
            .filter_map(|(from, _)| self.legal_moves(from))
            .flatten()
            .collect()
    }

    fn has_legal_move(&self, color: Color) -> bool {
        self.board
            .pieces(color)
            .any(|(from, _)| self.legal_moves(from).is_some_and(|m| !m.is_empty()))
    }

    /// True if an opposing piece attacks `color`'s king on the current board
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_king_attacked(color)
    }

    #[must_use]
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    #[must_use]
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Check, checkmate and stalemate folded into one query
    #[must_use]
    pub fn status(&self, color: Color) -> GameStatus {
        let in_check = self.is_in_check(color);
        let can_move = self.has_legal_move(color);
        let status = match (in_check, can_move) {
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, true) => GameStatus::Ongoing,
            (false, false) => GameStatus::Stalemate,
        };
        #[cfg(feature = "logging")]
        log::trace!("status of {color}: {status}");
        status
    }

    /// Apply `mv` to the authoritative board and pass the turn.
    ///
    /// Fails without touching the game if the origin is empty, holds a piece
    /// of the side not on move, or `mv` is not one of that piece's legal moves.
    pub fn make_move(&mut self, mv: Move) -> Result<(), InvalidMoveError> {
        let result = self.validate(mv);
        #[cfg(feature = "logging")]
        if let Err(err) = &result {
            log::debug!("rejected {mv}: {err}");
        }
        result?;

        self.board.apply_unchecked(mv);
        #[cfg(feature = "logging")]
        log::debug!("{} played {mv}", self.turn);
        self.turn = self.turn.opponent();
        Ok(())
    }

    fn validate(&self, mv: Move) -> Result<(), InvalidMoveError> {
        let from = mv.from();
        let piece = self
            .board
            .piece_at(from)
            .ok_or(InvalidMoveError::NoPieceAtOrigin { from })?;
        if piece.color() != self.turn {
            return Err(InvalidMoveError::NotYourTurn {
                from,
                piece_color: piece.color(),
                turn: self.turn,
            });
        }
        let legal = self.legal_moves(from).unwrap_or_default();
        if !legal.contains(&mv) {
            return Err(InvalidMoveError::IllegalMove { mv });
        }
        Ok(())
    }
}
