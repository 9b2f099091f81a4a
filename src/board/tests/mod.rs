//! Board module tests.
//!
//! - `movegen.rs` - pseudo-legal generation per piece kind
//! - `state.rs` - storage, duplication and setup
//! - `proptest.rs` - property-based tests over random positions


use crate::board::{Board, BoardBuilder, Coordinate, Piece};

/// Build a board from `(row, column, letter)` triples, upper-case for White.
pub(crate) fn position(pieces: &[(u8, u8, char)]) -> Board {
    let mut builder = BoardBuilder::new();
    for &(row, column, letter) in pieces {
        let piece = Piece::from_char(letter).expect("valid piece letter");
        builder = builder.piece(Coordinate::at(row, column), piece.color(), piece.kind());
    }
    builder.build()
}

/// Sorted destination squares of a move list
pub(crate) fn destinations<'a>(moves: impl IntoIterator<Item = &'a crate::board::Move>) -> Vec<(u8, u8)> {
    let mut out: Vec<(u8, u8)> = moves
        .into_iter()
        .map(|m| (m.to().row(), m.to().column()))
        .collect();
    out.sort_unstable();
    out
}
