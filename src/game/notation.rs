//! Human-readable move notation.
//!
//! Castles render as "0-0"/"0-0-0"; everything else is
//! `[prefix][x][destination][=Q]`, where pawns prefix their file letter on
//! captures and other pieces prefix their letter. En passant appends an
//! explicit " e.p." suffix. No board context is needed: the move snapshots
//! everything at construction time.

use std::fmt;

use super::types::{Move, Piece};

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_castle {
            return write!(f, "{}", if self.to.1 == 6 { "0-0" } else { "0-0-0" });
        }

        let (_, piece) = self.piece;
        if piece == Piece::Pawn {
            if self.is_capture() {
                write!(f, "{}x", (self.from.1 as u8 + b'a') as char)?;
            }
            write!(f, "{}", self.to)?;
            if self.is_promotion {
                write!(f, "=Q")?;
            }
            if self.is_en_passant {
                write!(f, " e.p.")?;
            }
            Ok(())
        } else {
            write!(f, "{}", piece.to_char().to_ascii_uppercase())?;
            if self.is_capture() {
                write!(f, "x")?;
            }
            write!(f, "{}", self.to)
        }
    }
}
