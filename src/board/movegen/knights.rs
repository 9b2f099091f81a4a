use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Board, Color, Coordinate, Move, MoveList};

impl Board {
    pub(crate) fn push_knight_moves(&self, from: Coordinate, color: Color, moves: &mut MoveList) {
        for &to in &KNIGHT_TARGETS[from.index()] {
            if self.can_land(to, color) {
                moves.push(Move::new(from, to));
            }
        }
    }
}
