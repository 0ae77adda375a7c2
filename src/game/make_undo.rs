//! State mutation: applying moves, undoing them, and the proposed-move
//! entry point.

use super::error::MoveError;
use super::state::{GameState, Undo};
use super::types::{Move, Piece, Square};

impl GameState {
    /// Attempt the move proposed by the endpoints, accepting it only if it
    /// matches a move in the current legal list. On a match the generator's
    /// fully decorated move is applied and returned; otherwise the state is
    /// unchanged.
    pub fn try_apply(&mut self, from: Square, to: Square) -> Result<Move, MoveError> {
        let legal = self.legal_moves();
        match legal.find(from, to) {
            Some(mv) => {
                self.apply_move(mv);
                Ok(mv)
            }
            None => Err(MoveError::Illegal { from, to }),
        }
    }

    /// Apply a move produced by [`legal_moves`](Self::legal_moves).
    ///
    /// Moves the piece, flips the side to move, maintains the king-location
    /// cache, performs promotion/en-passant/castling side effects, updates
    /// castling rights, and pushes one undo-log entry holding the pre-move
    /// en-passant target and rights.
    pub fn apply_move(&mut self, mv: Move) {
        let undo = Undo {
            en_passant_target: self.en_passant_target,
            castling_rights: self.castling_rights,
        };

        self.board[mv.from.0][mv.from.1] = None;
        self.board[mv.to.0][mv.to.1] = Some(mv.piece);
        self.move_log.push(mv);
        self.white_to_move = !self.white_to_move;

        let (color, piece) = mv.piece;
        if piece == Piece::King {
            self.king_location[color.index()] = mv.to;
        }

        if mv.is_promotion {
            // Auto-queen: this engine offers no under-promotion choice.
            self.board[mv.to.0][mv.to.1] = Some((color, Piece::Queen));
        }

        if mv.is_en_passant {
            // The captured pawn sits beside the start square, not on the
            // destination.
            self.board[mv.from.0][mv.to.1] = None;
        }

        if piece == Piece::Pawn && mv.from.0.abs_diff(mv.to.0) == 2 {
            self.en_passant_target = Some(Square((mv.from.0 + mv.to.0) / 2, mv.from.1));
        } else {
            self.en_passant_target = None;
        }

        if mv.is_castle {
            let row = mv.to.0;
            if mv.to.1 > mv.from.1 {
                // Kingside: corner rook lands just inside the king.
                self.board[row][mv.to.1 - 1] = self.board[row][mv.to.1 + 1];
                self.board[row][mv.to.1 + 1] = None;
            } else {
                self.board[row][mv.to.1 + 1] = self.board[row][mv.to.1 - 2];
                self.board[row][mv.to.1 - 2] = None;
            }
        }

        self.update_castling_rights(&mv);
        self.undo_log.push(undo);
    }

    /// Undo the most recent move, restoring the exact prior state. Returns
    /// the undone move, or `None` if the history is empty.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.move_log.pop()?;
        let undo = self
            .undo_log
            .pop()
            .expect("undo log out of sync with move log");

        self.board[mv.from.0][mv.from.1] = Some(mv.piece);
        self.board[mv.to.0][mv.to.1] = mv.captured;
        self.white_to_move = !self.white_to_move;

        let (color, piece) = mv.piece;
        if piece == Piece::King {
            self.king_location[color.index()] = mv.from;
        }

        if mv.is_en_passant {
            self.board[mv.to.0][mv.to.1] = None;
            self.board[mv.from.0][mv.to.1] = mv.captured;
        }

        self.en_passant_target = undo.en_passant_target;
        self.castling_rights = undo.castling_rights;

        if mv.is_castle {
            let row = mv.to.0;
            if mv.to.1 > mv.from.1 {
                self.board[row][mv.to.1 + 1] = self.board[row][mv.to.1 - 1];
                self.board[row][mv.to.1 - 1] = None;
            } else {
                self.board[row][mv.to.1 - 2] = self.board[row][mv.to.1 + 1];
                self.board[row][mv.to.1 + 1] = None;
            }
        }

        self.checkmate = false;
        self.stalemate = false;
        Some(mv)
    }

    /// Rights only ever transition held -> lost here; undo restores them
    /// from the undo log, never from this rule.
    fn update_castling_rights(&mut self, mv: &Move) {
        // A rook captured on its home corner loses the right even if the
        // capturer is not a rook.
        if let Some((cap_color, Piece::Rook)) = mv.captured {
            if mv.to.0 == cap_color.back_row() {
                if mv.to.1 == 0 {
                    self.castling_rights.clear(cap_color, false);
                } else if mv.to.1 == 7 {
                    self.castling_rights.clear(cap_color, true);
                }
            }
        }

        let (color, piece) = mv.piece;
        match piece {
            Piece::King => self.castling_rights.clear_color(color),
            Piece::Rook if mv.from.0 == color.back_row() => {
                if mv.from.1 == 0 {
                    self.castling_rights.clear(color, false);
                } else if mv.from.1 == 7 {
                    self.castling_rights.clear(color, true);
                }
            }
            _ => {}
        }
    }
}
