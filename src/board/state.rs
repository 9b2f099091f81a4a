//! Square-addressable piece storage.

use once_cell::sync::Lazy;

use super::error::SnapshotError;
use super::{Color, Coordinate, Move, Piece, PieceKind};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

static STANDARD_SETUP: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for (i, &kind) in BACK_RANK.iter().enumerate() {
        let column = i as u8 + 1;
        for color in Color::BOTH {
            let pawn_row = color.pawn_start_row();
            board.set_piece(
                Coordinate::at(color.back_row(), column),
                Some(Piece::new(color, kind)),
            );
            board.set_piece(
                Coordinate::at(pawn_row, column),
                Some(Piece::new(color, PieceKind::Pawn)),
            );
        }
    }
    board
});

/// An 8x8 grid holding at most one piece per square.
///
/// Storage is a flat array, so `clone` is a constant-size copy that shares
/// nothing with the source. Legality checking relies on that to simulate moves
/// on scratch boards.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    pub(crate) squares: [Option<Piece>; 64],
}

impl Board {
    /// A board with no pieces
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// A board in the standard starting arrangement
    #[must_use]
    pub fn standard() -> Self {
        STANDARD_SETUP.clone()
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, at: Coordinate) -> Option<Piece> {
        self.squares[at.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, at: Coordinate) -> bool {
        self.squares[at.index()].is_none()
    }

    /// Overwrite a square. `None` clears it.
    #[inline]
    pub fn set_piece(&mut self, at: Coordinate, piece: Option<Piece>) {
        self.squares[at.index()] = piece;
    }

    /// Independent copy of this board
    #[must_use]
    pub fn duplicate(&self) -> Board {
        self.clone()
    }

    /// Remove every piece
    pub fn clear(&mut self) {
        self.squares = [None; 64];
    }

    /// Replace the contents with the standard 32-piece starting arrangement
    pub fn reset_to_standard_setup(&mut self) {
        self.squares = STANDARD_SETUP.squares;
    }

    /// All 64 squares with their occupants, row 1 first and column 1 first within a row
    pub fn squares(&self) -> impl Iterator<Item = (Coordinate, Option<Piece>)> + '_ {
        Coordinate::all().zip(self.squares.iter().copied())
    }

    /// Rebuild a board from occupants listed in [`Board::squares`] order
    pub fn from_squares(squares: &[Option<Piece>]) -> Result<Board, SnapshotError> {
        let array: [Option<Piece>; 64] =
            squares
                .try_into()
                .map_err(|_| SnapshotError::WrongSquareCount {
                    found: squares.len(),
                })?;
        Ok(Board { squares: array })
    }

    /// Occupied squares belonging to `color`
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.squares().filter_map(move |(at, p)| match p {
            Some(piece) if piece.color() == color => Some((at, piece)),
            _ => None,
        })
    }

    /// Square of `color`'s king, or `None` if it has none
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Coordinate> {
        let king = Piece::new(color, PieceKind::King);
        self.pieces(color)
            .find(|&(_, piece)| piece == king)
            .map(|(at, _)| at)
    }

    /// Apply a move with no legality checks.
    ///
    /// Clears the origin and places the mover, or the promoted piece, on the
    /// destination, replacing whatever stood there. An empty origin is a no-op.
    pub fn apply_unchecked(&mut self, mv: Move) {
        let Some(piece) = self.piece_at(mv.from()) else {
            return;
        };
        let placed = match mv.promotion() {
            Some(kind) => Piece::new(piece.color(), kind),
            None => piece,
        };
        self.set_piece(mv.from(), None);
        self.set_piece(mv.to(), Some(placed));
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Board {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(64))?;
        for square in &self.squares {
            seq.serialize_element(square)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let squares = Vec::<Option<Piece>>::deserialize(deserializer)?;
        Board::from_squares(&squares).map_err(serde::de::Error::custom)
    }
}
