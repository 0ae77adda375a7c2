//! Precomputed per-square destination tables and ray directions.
//!
//! The knight and king tables hold the in-bounds destination squares for
//! every origin square, built once on first use. Generators and the scanner
//! iterate these instead of re-checking bounds on raw offsets.

use once_cell::sync::Lazy;

use super::types::Square;

/// The four orthogonal ray directions, as (row, col) deltas
pub(crate) const STRAIGHT_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// The four diagonal ray directions
pub(crate) const DIAGONAL_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// All eight ray directions: orthogonals first, then diagonals.
/// The scanner depends on this ordering to classify rays by index.
pub(crate) const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

fn build_targets(offsets: &[(isize, isize); 8]) -> [Vec<Square>; 64] {
    let mut targets: [Vec<Square>; 64] = std::array::from_fn(|_| Vec::new());
    for (idx, entry) in targets.iter_mut().enumerate() {
        let from = Square(idx / 8, idx % 8);
        for &(dr, dc) in offsets {
            if let Some(to) = from.offset(dr, dc) {
                entry.push(to);
            }
        }
    }
    targets
}

/// In-bounds knight destinations for every origin square
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| build_targets(&KNIGHT_OFFSETS));

/// In-bounds king destinations for every origin square
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| build_targets(&KING_OFFSETS));
