//! Fluent builder for constructing chess positions.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Coordinate, PieceKind};
//!
//! let board = BoardBuilder::new()
//!     .piece(Coordinate::at(1, 5), Color::White, PieceKind::King)
//!     .piece(Coordinate::at(8, 5), Color::Black, PieceKind::King)
//!     .piece(Coordinate::at(2, 1), Color::White, PieceKind::Pawn)
//!     .build();
//! assert!(board.king_square(Color::Black).is_some());
//! ```

use super::{Board, Color, Coordinate, Piece, PieceKind};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    board: Board,
}

impl BoardBuilder {
    /// Start from an empty board.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Start from the standard initial position.
    #[must_use]
    pub fn standard() -> Self {
        BoardBuilder {
            board: Board::standard(),
        }
    }

    /// Place a piece, replacing whatever was on the square.
    #[must_use]
    pub fn piece(mut self, at: Coordinate, color: Color, kind: PieceKind) -> Self {
        self.board.set_piece(at, Some(Piece::new(color, kind)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, at: Coordinate) -> Self {
        self.board.set_piece(at, None);
        self
    }

    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_matches_board() {
        assert_eq!(BoardBuilder::standard().build(), Board::standard());
    }

    #[test]
    fn test_piece_replaces_existing() {
        let at = Coordinate::at(4, 4);
        let board = BoardBuilder::new()
            .piece(at, Color::White, PieceKind::Rook)
            .piece(at, Color::Black, PieceKind::Knight)
            .build();
        assert_eq!(
            board.piece_at(at),
            Some(Piece::new(Color::Black, PieceKind::Knight))
        );
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::standard().clear(Coordinate::at(2, 5)).build();
        assert!(board.is_empty(Coordinate::at(2, 5)));
        assert!(!board.is_empty(Coordinate::at(2, 4)));
    }
}
