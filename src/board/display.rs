use std::fmt;

use super::{Board, Coordinate};

/// Row 8 at the top; White upper-case, Black lower-case, `.` for empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for row in (1..=8).rev() {
            write!(f, "{row} |")?;
            for column in 1..=8 {
                let ch = self
                    .piece_at(Coordinate::at(row, column))
                    .map_or('.', |p| p.to_char());
                write!(f, " {ch}")?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  +-----------------+")?;
        write!(f, "    1 2 3 4 5 6 7 8")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_board_rows() {
        let text = Board::standard().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "8 | r n b q k b n r |");
        assert_eq!(lines[2], "7 | p p p p p p p p |");
        assert_eq!(lines[5], "4 | . . . . . . . . |");
        assert_eq!(lines[8], "1 | R N B Q K B N R |");
    }
}
