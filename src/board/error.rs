//! Error types for board operations.

use std::fmt;

/// Error type for coordinate construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    /// Row out of bounds (must be 1-8)
    RowOutOfBounds { row: u8 },
    /// Column out of bounds (must be 1-8)
    ColumnOutOfBounds { column: u8 },
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 1-8)")
            }
            CoordinateError::ColumnOutOfBounds { column } => {
                write!(f, "Column {column} out of bounds (must be 1-8)")
            }
        }
    }
}

impl std::error::Error for CoordinateError {}

/// Error type for rebuilding a board from a square listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// A full board needs exactly 64 entries
    WrongSquareCount { found: usize },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::WrongSquareCount { found } => {
                write!(f, "Board listing must have 64 squares, found {found}")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}
