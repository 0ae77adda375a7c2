//! Move generation: attack detection, per-piece pseudo-legal generators,
//! the legal-move filter, and castling.

use super::attack_tables::{
    ALL_DIRECTIONS, DIAGONAL_DIRECTIONS, KING_TARGETS, KNIGHT_TARGETS, STRAIGHT_DIRECTIONS,
};
use super::scanner::{CheckThreat, ScanReport};
use super::state::GameState;
use super::types::{Color, Move, MoveList, Piece, Square};

/// A pinned piece may only move along its pin axis, in either direction.
#[inline]
fn pin_allows(pin: Option<(isize, isize)>, dir: (isize, isize)) -> bool {
    match pin {
        None => true,
        Some(axis) => axis == dir || axis == (-dir.0, -dir.1),
    }
}

impl GameState {
    /// Generate all strictly legal moves for the side to move, refreshing
    /// the cached check/checkmate/stalemate flags.
    ///
    /// Takes `&mut self` because the query toggles the side to move inside
    /// attack detection and temporarily relocates the king-location cache
    /// while validating king moves; both are reverted before returning.
    pub fn legal_moves(&mut self) -> MoveList {
        let report = self.scan_pins_and_checks();
        self.in_check = report.in_check;
        let us = self.side_to_move();
        let king = self.king_location[us.index()];

        let mut moves;
        if report.in_check {
            if report.checks.len() == 1 {
                // A single check can be met by moving the king, capturing
                // the checker, or blocking the ray.
                moves = self.pseudo_legal_moves(&report);
                let valid = self.check_resolution_squares(king, report.checks[0]);
                moves.retain(|m| m.piece.1 == Piece::King || valid.contains(&m.to));
            } else {
                // Double check: only the king can resolve it.
                moves = MoveList::new();
                self.king_moves(king, &mut moves);
            }
        } else {
            moves = self.pseudo_legal_moves(&report);
            self.castle_moves(king, &mut moves);
        }

        if moves.is_empty() {
            if self.in_check {
                self.checkmate = true;
            } else {
                self.stalemate = true;
            }
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }
        moves
    }

    /// The squares a non-king move may land on to resolve a single check:
    /// the checker's square, plus every square between king and checker
    /// when the checker is a slider. A knight check cannot be blocked.
    fn check_resolution_squares(&self, king: Square, check: CheckThreat) -> Vec<Square> {
        if let Some((_, Piece::Knight)) = self.piece_at(check.attacker) {
            return vec![check.attacker];
        }
        let mut squares = Vec::new();
        for dist in 1..8 {
            let Some(sq) = king.offset(check.direction.0 * dist, check.direction.1 * dist) else {
                break;
            };
            squares.push(sq);
            if sq == check.attacker {
                break;
            }
        }
        squares
    }

    /// Whether the opposing side can move a piece onto `sq`.
    ///
    /// Flips the side to move, enumerates that side's pseudo-legal moves
    /// with an empty pin list (only destination reachability matters), and
    /// flips back.
    pub(crate) fn square_under_attack(&mut self, sq: Square) -> bool {
        self.white_to_move = !self.white_to_move;
        let moves = self.pseudo_legal_moves(&ScanReport::unfiltered());
        self.white_to_move = !self.white_to_move;
        moves.iter().any(|m| m.to == sq)
    }

    /// Candidate moves for every piece of the side to move, ignoring king
    /// safety except for the pin constraints in `report` and the king's own
    /// self-validation.
    fn pseudo_legal_moves(&mut self, report: &ScanReport) -> MoveList {
        let us = self.side_to_move();
        let mut moves = MoveList::new();
        for row in 0..8 {
            for col in 0..8 {
                let Some((color, piece)) = self.board[row][col] else {
                    continue;
                };
                if color != us {
                    continue;
                }
                let from = Square(row, col);
                match piece {
                    Piece::Pawn => self.pawn_moves(from, report, &mut moves),
                    Piece::Knight => self.knight_moves(from, report, &mut moves),
                    Piece::Bishop => {
                        self.sliding_moves(from, &DIAGONAL_DIRECTIONS, report, &mut moves);
                    }
                    Piece::Rook => {
                        self.sliding_moves(from, &STRAIGHT_DIRECTIONS, report, &mut moves);
                    }
                    Piece::Queen => self.sliding_moves(from, &ALL_DIRECTIONS, report, &mut moves),
                    Piece::King => self.king_moves(from, &mut moves),
                }
            }
        }
        moves
    }

    /// Build a move from the current board, snapshotting the moved and
    /// captured pieces. The source square must be occupied.
    fn compose(&self, from: Square, to: Square, en_passant: bool, castle: bool) -> Move {
        let (color, piece) = self.piece_at(from).expect("move composed from empty square");
        let captured = if en_passant {
            Some((color.opponent(), Piece::Pawn))
        } else {
            self.piece_at(to)
        };
        Move {
            from,
            to,
            piece: (color, piece),
            captured,
            is_promotion: piece == Piece::Pawn && to.0 == color.promotion_row(),
            is_en_passant: en_passant,
            is_castle: castle,
        }
    }

    fn pawn_moves(&self, from: Square, report: &ScanReport, out: &mut MoveList) {
        let us = self.side_to_move();
        let them = us.opponent();
        let pin = report.pin_at(from);
        let dir = us.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty_square(one) && pin_allows(pin, (dir, 0)) {
                out.push(self.compose(from, one, false, false));
                if from.0 == us.pawn_start_row() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.is_empty_square(two) {
                            out.push(self.compose(from, two, false, false));
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target) = from.offset(dir, dc) else {
                continue;
            };
            if !pin_allows(pin, (dir, dc)) {
                continue;
            }
            match self.piece_at(target) {
                Some((color, _)) if color == them => {
                    out.push(self.compose(from, target, false, false));
                }
                None if Some(target) == self.en_passant_target => {
                    if self.en_passant_is_safe(from, target) {
                        out.push(self.compose(from, target, true, false));
                    }
                }
                _ => {}
            }
        }
    }

    /// The one case ordinary pin detection misses: capturing en passant
    /// removes *two* pieces from the capturing pawn's rank. If the king
    /// shares that rank, walk from the king past both vacated squares; an
    /// enemy rook or queen as the first remaining piece makes the capture
    /// illegal.
    fn en_passant_is_safe(&self, from: Square, target: Square) -> bool {
        let us = self.side_to_move();
        let them = us.opponent();
        let king = self.king_location[us.index()];
        if king.0 != from.0 {
            return true;
        }
        let step: isize = if from.1 > king.1 { 1 } else { -1 };
        let mut col = king.1 as isize + step;
        while (0..8).contains(&col) {
            let c = col as usize;
            if c != from.1 && c != target.1 {
                if let Some((color, piece)) = self.board[from.0][c] {
                    return !(color == them && piece.attacks_straight());
                }
            }
            col += step;
        }
        true
    }

    fn knight_moves(&self, from: Square, report: &ScanReport, out: &mut MoveList) {
        // No knight move stays on a pin axis.
        if report.pin_at(from).is_some() {
            return;
        }
        let us = self.side_to_move();
        for &to in &KNIGHT_TARGETS[from.as_index()] {
            match self.piece_at(to) {
                Some((color, _)) if color == us => {}
                _ => out.push(self.compose(from, to, false, false)),
            }
        }
    }

    fn sliding_moves(
        &self,
        from: Square,
        directions: &[(isize, isize)],
        report: &ScanReport,
        out: &mut MoveList,
    ) {
        let us = self.side_to_move();
        let pin = report.pin_at(from);
        for &(dr, dc) in directions {
            if !pin_allows(pin, (dr, dc)) {
                continue;
            }
            for dist in 1..8 {
                let Some(to) = from.offset(dr * dist, dc * dist) else {
                    break;
                };
                match self.piece_at(to) {
                    None => out.push(self.compose(from, to, false, false)),
                    Some((color, _)) if color != us => {
                        out.push(self.compose(from, to, false, false));
                        break;
                    }
                    _ => break,
                }
            }
        }
    }

    fn king_moves(&mut self, from: Square, out: &mut MoveList) {
        let us = self.side_to_move();
        for &to in KING_TARGETS[from.as_index()].iter() {
            if let Some((color, _)) = self.piece_at(to) {
                if color == us {
                    continue;
                }
            }
            // Validate by rescanning from the destination as if the king
            // already stood there; the cache is restored either way.
            let report = self.with_king_at(us, to, GameState::scan_pins_and_checks);
            if !report.in_check {
                out.push(self.compose(from, to, false, false));
            }
        }
    }

    /// Run `eval` with the king-location cache pointing at `sq`, restoring
    /// the real location afterwards regardless of the outcome.
    fn with_king_at<R>(&mut self, color: Color, sq: Square, eval: impl FnOnce(&Self) -> R) -> R {
        let saved = self.king_location[color.index()];
        self.king_location[color.index()] = sq;
        let result = eval(self);
        self.king_location[color.index()] = saved;
        result
    }

    fn castle_moves(&mut self, king: Square, out: &mut MoveList) {
        if self.square_under_attack(king) {
            return;
        }
        let us = self.side_to_move();
        if self.castling_rights.has(us, true) {
            self.kingside_castle_moves(king, out);
        }
        if self.castling_rights.has(us, false) {
            self.queenside_castle_moves(king, out);
        }
    }

    fn kingside_castle_moves(&mut self, king: Square, out: &mut MoveList) {
        if king.1 + 2 > 7 {
            return;
        }
        let one = Square(king.0, king.1 + 1);
        let two = Square(king.0, king.1 + 2);
        if self.is_empty_square(one)
            && self.is_empty_square(two)
            && !self.square_under_attack(one)
            && !self.square_under_attack(two)
        {
            out.push(self.compose(king, two, false, true));
        }
    }

    fn queenside_castle_moves(&mut self, king: Square, out: &mut MoveList) {
        if king.1 < 3 {
            return;
        }
        let one = Square(king.0, king.1 - 1);
        let two = Square(king.0, king.1 - 2);
        let three = Square(king.0, king.1 - 3);
        // The rook passes over `three` but the king never does, so only the
        // two nearer squares need to be safe.
        if self.is_empty_square(one)
            && self.is_empty_square(two)
            && self.is_empty_square(three)
            && !self.square_under_attack(one)
            && !self.square_under_attack(two)
        {
            out.push(self.compose(king, two, false, true));
        }
    }
}
