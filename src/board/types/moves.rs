//! Move type and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;
use super::piece::PieceKind;

/// A move from one coordinate to another, with an optional promotion kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Coordinate,
    to: Coordinate,
    promotion: Option<PieceKind>,
}

impl Move {
    /// Create a move without promotion
    #[inline]
    #[must_use]
    pub const fn new(from: Coordinate, to: Coordinate) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Create a promoting pawn move
    #[inline]
    #[must_use]
    pub const fn with_promotion(from: Coordinate, to: Coordinate, kind: PieceKind) -> Self {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Coordinate {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Coordinate {
        self.to
    }

    /// The kind the pawn becomes, if this is a promotion
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "={}", kind.to_char().to_ascii_uppercase())?;
        }
        Ok(())
    }
}

/// Enough for every move one side can have in a legal position.
pub(crate) const MAX_MOVES: usize = 256;
const EMPTY_MOVE: Move = Move::new(Coordinate::at(1, 1), Coordinate::at(1, 1));

/// List of moves with fixed-size backing array.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    pub(crate) fn clear(&mut self) {
        self.len = 0;
    }

    /// Keep only the moves for which `keep` returns true, preserving order
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&Move) -> bool) {
        let mut write = 0;
        for read in 0..self.len {
            let mv = self.moves[read];
            if keep(&mv) {
                self.moves[write] = mv;
                write += 1;
            }
        }
        self.len = write;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.as_slice().contains(mv)
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(r1: u8, c1: u8, r2: u8, c2: u8) -> Move {
        Move::new(Coordinate::at(r1, c1), Coordinate::at(r2, c2))
    }

    #[test]
    fn test_move_equality_includes_promotion() {
        let from = Coordinate::at(7, 1);
        let to = Coordinate::at(8, 1);
        assert_ne!(
            Move::with_promotion(from, to, PieceKind::Queen),
            Move::with_promotion(from, to, PieceKind::Knight)
        );
        assert_ne!(Move::new(from, to), Move::with_promotion(from, to, PieceKind::Queen));
    }

    #[test]
    fn test_display() {
        assert_eq!(mv(2, 5, 4, 5).to_string(), "(2,5)->(4,5)");
        let promo = Move::with_promotion(Coordinate::at(7, 4), Coordinate::at(8, 4), PieceKind::Rook);
        assert_eq!(promo.to_string(), "(7,4)->(8,4)=R");
    }

    #[test]
    fn test_retain_keeps_order() {
        let mut list = MoveList::new();
        list.push(mv(1, 1, 2, 1));
        list.push(mv(1, 1, 3, 1));
        list.push(mv(1, 1, 4, 1));
        list.retain(|m| m.to().row() != 3);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0], mv(1, 1, 2, 1));
        assert_eq!(list[1], mv(1, 1, 4, 1));
    }

    #[test]
    fn test_into_iter_len() {
        let mut list = MoveList::new();
        list.push(mv(1, 1, 2, 2));
        list.push(mv(1, 1, 3, 3));
        let iter = list.into_iter();
        assert_eq!(iter.len(), 2);
    }
}
