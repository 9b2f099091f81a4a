//! Pseudo-legal move generation.
//!
//! Moves here obey each piece's shape, blocking and capture rules, but ignore
//! whether the mover's own king is left attacked. Legality filtering lives in
//! [`crate::game`].

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::{Board, Color, Coordinate, Move, MoveList, Piece, PieceKind};

impl Board {
    /// Pseudo-legal moves for the piece on `from`, or `None` if the square is empty
    #[must_use]
    pub fn pseudo_legal_moves(&self, from: Coordinate) -> Option<MoveList> {
        let piece = self.piece_at(from)?;
        let mut moves = MoveList::new();
        self.push_piece_moves(from, piece, &mut moves);
        Some(moves)
    }

    pub(crate) fn push_piece_moves(&self, from: Coordinate, piece: Piece, moves: &mut MoveList) {
        let color = piece.color();
        match piece.kind() {
            PieceKind::Pawn => self.push_pawn_moves(from, color, moves),
            PieceKind::Knight => self.push_knight_moves(from, color, moves),
            PieceKind::Bishop => self.push_sliding_moves(from, color, &BISHOP_DIRECTIONS, moves),
            PieceKind::Rook => self.push_sliding_moves(from, color, &ROOK_DIRECTIONS, moves),
            PieceKind::Queen => self.push_sliding_moves(from, color, &QUEEN_DIRECTIONS, moves),
            PieceKind::King => self.push_king_moves(from, color, moves),
        }
    }

    /// True if a jumping piece of `color` may land on `to`: empty or enemy-held
    #[inline]
    fn can_land(&self, to: Coordinate, color: Color) -> bool {
        match self.piece_at(to) {
            None => true,
            Some(occupant) => occupant.color() != color,
        }
    }

    /// True if some piece of `attacker` has a pseudo-legal move landing on `target`.
    ///
    /// Only the attacker's pieces are scanned.
    #[must_use]
    pub fn is_attacked_by(&self, target: Coordinate, attacker: Color) -> bool {
        let mut moves = MoveList::new();
        for (from, piece) in self.pieces(attacker) {
            self.push_piece_moves(from, piece, &mut moves);
            if moves.iter().any(|m| m.to() == target) {
                return true;
            }
            moves.clear();
        }
        false
    }

    /// True if `color`'s king stands on a square `color.opponent()` attacks.
    ///
    /// A board with no king for `color` is never in check.
    #[must_use]
    pub fn is_king_attacked(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king_sq) => self.is_attacked_by(king_sq, color.opponent()),
            None => false,
        }
    }

    /// Whether `mv` would leave its mover's king attacked, decided on a scratch copy
    pub(crate) fn exposes_own_king(&self, mv: Move, mover: Color) -> bool {
        let mut scratch = self.duplicate();
        scratch.apply_unchecked(mv);
        scratch.is_king_attacked(mover)
    }
}
