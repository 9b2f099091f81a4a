use super::super::{Board, Color, Coordinate, Move, MoveList};

impl Board {
    /// Walk each ray outward until the edge, a friendly piece (excluded) or an
    /// enemy piece (included as a capture).
    pub(crate) fn push_sliding_moves(
        &self,
        from: Coordinate,
        color: Color,
        directions: &[(i8, i8)],
        moves: &mut MoveList,
    ) {
        for &(dr, dc) in directions {
            let mut cursor = from;
            while let Some(to) = cursor.offset(dr, dc) {
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to)),
                    Some(occupant) => {
                        if occupant.color() != color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                cursor = to;
            }
        }
    }
}
