use super::super::{Board, Color, Coordinate, Move, MoveList, PROMOTION_KINDS};

impl Board {
    pub(crate) fn push_pawn_moves(&self, from: Coordinate, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                push_pawn_move(from, forward, color, moves);
                if from.row() == color.pawn_start_row() {
                    if let Some(double) = forward.offset(dir, 0) {
                        if self.is_empty(double) {
                            moves.push(Move::new(from, double));
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target) = from.offset(dir, dc) else {
                continue;
            };
            if let Some(occupant) = self.piece_at(target) {
                if occupant.color() != color {
                    push_pawn_move(from, target, color, moves);
                }
            }
        }
    }
}

/// One move, or four promotion moves when `to` is on the far rank
fn push_pawn_move(from: Coordinate, to: Coordinate, color: Color, moves: &mut MoveList) {
    if to.row() == color.promotion_row() {
        for kind in PROMOTION_KINDS {
            moves.push(Move::with_promotion(from, to, kind));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}
