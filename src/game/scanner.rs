//! Pin and check detection.
//!
//! One scan radiates from the side-to-move's king along all eight rays and
//! the eight knight offsets, classifying every threat it finds. The result
//! drives the whole legality pass: generators constrain pinned pieces to
//! their pin axis and the legal-move filter resolves checks, with no
//! per-move make/unmake testing.

use super::attack_tables::{ALL_DIRECTIONS, KNIGHT_TARGETS};
use super::state::GameState;
use super::types::{Color, Piece, Square};

/// A friendly piece that cannot leave the line between its king and an
/// enemy slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Pin {
    pub(crate) square: Square,
    /// Ray direction from the king through the pinned piece
    pub(crate) direction: (isize, isize),
}

/// An active attack on the side-to-move's king.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CheckThreat {
    pub(crate) attacker: Square,
    /// Ray direction from the king toward the attacker; for a knight this
    /// is the knight offset itself.
    pub(crate) direction: (isize, isize),
}

/// Everything a single scan learned about the side-to-move's king.
#[derive(Clone, Debug)]
pub(crate) struct ScanReport {
    pub(crate) in_check: bool,
    pub(crate) pins: Vec<Pin>,
    pub(crate) checks: Vec<CheckThreat>,
}

impl ScanReport {
    /// An empty report, used when generating moves without pin filtering
    /// (attack detection cares only about destination reachability).
    pub(crate) fn unfiltered() -> Self {
        ScanReport {
            in_check: false,
            pins: Vec::new(),
            checks: Vec::new(),
        }
    }

    /// The pin axis constraining the piece on `sq`, if any.
    pub(crate) fn pin_at(&self, sq: Square) -> Option<(isize, isize)> {
        self.pins.iter().find(|p| p.square == sq).map(|p| p.direction)
    }
}

/// Whether an enemy piece at ray index `ray_idx`, `dist` steps from the
/// king, attacks along that ray. Rays 0-3 are orthogonal, 4-7 diagonal.
fn threatens(piece: Piece, enemy: Color, ray_idx: usize, dist: isize) -> bool {
    let straight_ray = ray_idx < 4;
    if straight_ray && piece.attacks_straight() {
        return true;
    }
    if !straight_ray && piece.attacks_diagonally() {
        return true;
    }
    if dist == 1 && piece == Piece::King {
        return true;
    }
    if dist == 1 && piece == Piece::Pawn {
        // A pawn only covers the two diagonals behind its advance: a white
        // pawn attacking the king sits below it (rays 6-7), a black pawn
        // above it (rays 4-5).
        return match enemy {
            Color::White => ray_idx >= 6,
            Color::Black => ray_idx == 4 || ray_idx == 5,
        };
    }
    false
}

impl GameState {
    /// Scan outward from the side-to-move's king, collecting every active
    /// check and every confirmed pin.
    ///
    /// A ray remembers the first friendly piece it meets as a candidate pin
    /// and keeps walking; the candidate is confirmed only if the next piece
    /// on the ray is an enemy slider attacking along it. A second piece of
    /// either color kills the ray. A friendly king on the ray is skipped
    /// entirely: during king-move validation the scan runs from a
    /// hypothetical square while the real king still occupies the board,
    /// and it must neither block nor pin.
    pub(crate) fn scan_pins_and_checks(&self) -> ScanReport {
        let us = self.side_to_move();
        let them = us.opponent();
        let king = self.king_location[us.index()];

        let mut in_check = false;
        let mut pins = Vec::new();
        let mut checks = Vec::new();

        for (ray_idx, &(dr, dc)) in ALL_DIRECTIONS.iter().enumerate() {
            let mut candidate: Option<Square> = None;
            for dist in 1..8 {
                let Some(sq) = king.offset(dr * dist, dc * dist) else {
                    break;
                };
                match self.piece_at(sq) {
                    Some((color, piece)) if color == us => {
                        if piece == Piece::King {
                            continue;
                        }
                        if candidate.is_none() {
                            candidate = Some(sq);
                        } else {
                            break;
                        }
                    }
                    Some((_, piece)) => {
                        if threatens(piece, them, ray_idx, dist) {
                            match candidate {
                                None => {
                                    in_check = true;
                                    checks.push(CheckThreat {
                                        attacker: sq,
                                        direction: (dr, dc),
                                    });
                                }
                                Some(pinned) => pins.push(Pin {
                                    square: pinned,
                                    direction: (dr, dc),
                                }),
                            }
                        }
                        break;
                    }
                    None => {}
                }
            }
        }

        for &sq in &KNIGHT_TARGETS[king.as_index()] {
            if self.piece_at(sq) == Some((them, Piece::Knight)) {
                in_check = true;
                checks.push(CheckThreat {
                    attacker: sq,
                    direction: (
                        sq.0 as isize - king.0 as isize,
                        sq.1 as isize - king.1 as isize,
                    ),
                });
            }
        }

        ScanReport {
            in_check,
            pins,
            checks,
        }
    }
}
