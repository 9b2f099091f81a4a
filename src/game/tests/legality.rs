//! Legal move filtering tests.

use super::{game_with, mv};
use crate::board::tests::destinations;
use crate::board::{Color, Coordinate, PieceKind};
use crate::game::Game;

#[test]
fn test_start_king_pawn_has_two_moves() {
    let game = Game::new();
    let moves = game.legal_moves(Coordinate::at(2, 5)).unwrap();
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(&mv(2, 5, 3, 5)));
    assert!(moves.contains(&mv(2, 5, 4, 5)));
}

#[test]
fn test_start_position_has_twenty_moves() {
    let game = Game::new();
    assert_eq!(game.all_legal_moves(Color::White).len(), 20);
    assert_eq!(game.all_legal_moves(Color::Black).len(), 20);
}

#[test]
fn test_empty_square_gives_none() {
    let game = Game::new();
    assert!(game.legal_moves(Coordinate::at(5, 5)).is_none());
}

#[test]
fn test_king_cannot_stay_on_attacked_file() {
    let game = game_with(&[(1, 5, 'K'), (8, 5, 'r')], Color::White);
    let moves = game.legal_moves(Coordinate::at(1, 5)).unwrap();
    assert!(moves.iter().all(|m| m.to().column() != 5));
    assert_eq!(destinations(&moves), vec![(1, 4), (1, 6), (2, 4), (2, 6)]);
}

#[test]
fn test_promotion_on_empty_board() {
    let game = game_with(&[(7, 4, 'P')], Color::White);
    let moves = game.legal_moves(Coordinate::at(7, 4)).unwrap();
    assert_eq!(moves.len(), 4);
    let mut kinds: Vec<PieceKind> = moves.iter().filter_map(|m| m.promotion()).collect();
    kinds.dedup();
    assert_eq!(kinds.len(), 4);
    assert!(moves.iter().all(|m| m.to() == Coordinate::at(8, 4)));
}

#[test]
fn test_pinned_rook_stays_on_pin_line() {
    let game = game_with(
        &[(1, 5, 'K'), (2, 5, 'R'), (8, 5, 'r'), (8, 1, 'k')],
        Color::White,
    );
    let moves = game.legal_moves(Coordinate::at(2, 5)).unwrap();
    assert_eq!(
        destinations(&moves),
        vec![(3, 5), (4, 5), (5, 5), (6, 5), (7, 5), (8, 5)]
    );
}

#[test]
fn test_only_capture_resolves_check() {
    let game = game_with(
        &[(1, 1, 'K'), (3, 8, 'R'), (1, 8, 'r'), (8, 4, 'k')],
        Color::White,
    );
    let rook_moves = game.legal_moves(Coordinate::at(3, 8)).unwrap();
    assert_eq!(destinations(&rook_moves), vec![(1, 8)]);
}

#[test]
fn test_king_cannot_capture_defended_piece() {
    let game = game_with(
        &[(1, 5, 'K'), (2, 5, 'q'), (8, 5, 'r'), (8, 8, 'k')],
        Color::White,
    );
    let moves = game.legal_moves(Coordinate::at(1, 5)).unwrap();
    assert!(moves.is_empty());
}

#[test]
fn test_legal_moves_ignore_turn() {
    let game = Game::new();
    assert_eq!(game.turn(), Color::White);
    let moves = game.legal_moves(Coordinate::at(7, 4)).unwrap();
    assert_eq!(destinations(&moves), vec![(5, 4), (6, 4)]);
}

#[test]
fn test_legal_is_subset_of_pseudo_legal() {
    let game = game_with(
        &[(1, 5, 'K'), (2, 5, 'R'), (2, 4, 'B'), (8, 5, 'r'), (4, 1, 'b'), (8, 8, 'k')],
        Color::White,
    );
    for (from, _) in game.board().pieces(Color::White) {
        let pseudo = game.board().pseudo_legal_moves(from).unwrap();
        let legal = game.legal_moves(from).unwrap();
        assert!(legal.iter().all(|m| pseudo.contains(m)));
    }
}
