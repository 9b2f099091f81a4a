//! Board coordinates.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::CoordinateError;

/// A square on the board as (row, column), both in `1..=8`.
///
/// Row 1 is White's back rank; column 1 is the queen-side edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(u8, u8)", into = "(u8, u8)"))]
pub struct Coordinate {
    row: u8,
    column: u8,
}

impl Coordinate {
    /// Create a coordinate with bounds checking
    #[must_use]
    pub const fn new(row: u8, column: u8) -> Option<Self> {
        if row >= 1 && row <= 8 && column >= 1 && column <= 8 {
            Some(Coordinate { row, column })
        } else {
            None
        }
    }

    /// Create a coordinate that is known to be on the board.
    ///
    /// # Panics
    /// Panics if either component is outside `1..=8`.
    #[must_use]
    pub const fn at(row: u8, column: u8) -> Self {
        match Coordinate::new(row, column) {
            Some(c) => c,
            None => panic!("coordinate out of range"),
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// Index into a 64-entry array (row-major, (1,1)=0, (8,8)=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.row as usize - 1) * 8 + (self.column as usize - 1)
    }

    /// Inverse of [`Coordinate::index`], or `None` for an index past 63
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < 64 {
            Some(Coordinate {
                row: (idx / 8) as u8 + 1,
                column: (idx % 8) as u8 + 1,
            })
        } else {
            None
        }
    }

    /// Step by a (row, column) delta, or `None` if that leaves the board
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: i8, d_column: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let column = self.column as i8 + d_column;
        if (1..=8).contains(&row) && (1..=8).contains(&column) {
            Some(Coordinate {
                row: row as u8,
                column: column as u8,
            })
        } else {
            None
        }
    }

    /// All 64 coordinates in row-major order
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..64).filter_map(Coordinate::from_index)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.column)
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

impl TryFrom<(u8, u8)> for Coordinate {
    type Error = CoordinateError;

    fn try_from((row, column): (u8, u8)) -> Result<Self, Self::Error> {
        if !(1..=8).contains(&row) {
            return Err(CoordinateError::RowOutOfBounds { row });
        }
        if !(1..=8).contains(&column) {
            return Err(CoordinateError::ColumnOutOfBounds { column });
        }
        Ok(Coordinate { row, column })
    }
}

impl From<Coordinate> for (u8, u8) {
    fn from(c: Coordinate) -> Self {
        (c.row, c.column)
    }
}
