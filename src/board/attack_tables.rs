use once_cell::sync::Lazy;

use super::Coordinate;

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// In-bounds landing squares for each origin square, indexed by `Coordinate::index`.
fn jump_table(deltas: &[(i8, i8); 8]) -> Vec<Vec<Coordinate>> {
    Coordinate::all()
        .map(|from| {
            deltas
                .iter()
                .filter_map(|&(dr, dc)| from.offset(dr, dc))
                .collect()
        })
        .collect()
}

pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<Coordinate>>> =
    Lazy::new(|| jump_table(&KNIGHT_DELTAS));

pub(crate) static KING_TARGETS: Lazy<Vec<Vec<Coordinate>>> = Lazy::new(|| jump_table(&KING_DELTAS));
