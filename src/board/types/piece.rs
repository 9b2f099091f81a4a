//! Piece, piece kind and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The six kinds of chess piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// All piece kinds
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Parse a kind from a letter (k, q, r, b, n, p), case-insensitive
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'k' => Some(PieceKind::King),
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            'p' => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    /// Lowercase letter for this kind
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        }
    }

    /// Returns true for the kinds a pawn may promote to
    #[inline]
    #[must_use]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

/// Promotion choices, queen first
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row of this color's back rank (1 for White, 8 for Black)
    #[inline]
    #[must_use]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting row (2 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    /// Row on which this color's pawns promote
    #[inline]
    #[must_use]
    pub(crate) const fn promotion_row(self) -> u8 {
        self.opponent().back_row()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece on the board: who owns it and what it is.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    color: Color,
    kind: PieceKind,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Letter for this piece, upper-case for White
    #[must_use]
    pub fn to_char(self) -> char {
        let c = self.kind.to_char();
        if self.color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Parse a piece from its letter (upper-case White, lower-case Black)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(color, kind))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_equality_is_by_value() {
        let a = Piece::new(Color::White, PieceKind::Rook);
        let b = Piece::new(Color::White, PieceKind::Rook);
        assert_eq!(a, b);
        assert_ne!(a, Piece::new(Color::Black, PieceKind::Rook));
        assert_ne!(a, Piece::new(Color::White, PieceKind::Bishop));
    }

    #[test]
    fn test_piece_char_roundtrip() {
        for color in Color::BOTH {
            for kind in PieceKind::ALL {
                let piece = Piece::new(color, kind);
                assert_eq!(Piece::from_char(piece.to_char()), Some(piece));
            }
        }
        assert_eq!(Piece::from_char('x'), None);
    }

    #[test]
    fn test_promotion_targets() {
        assert!(PROMOTION_KINDS.iter().all(|k| k.is_promotion_target()));
        assert!(!PieceKind::King.is_promotion_target());
        assert!(!PieceKind::Pawn.is_promotion_target());
    }

    #[test]
    fn test_color_rows() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::White.promotion_row(), 8);
        assert_eq!(Color::Black.promotion_row(), 1);
        assert_eq!(Color::Black.pawn_start_row(), 7);
    }
}
