//! Fluent builder for constructing arbitrary positions.
//!
//! The only entry point for positions other than the standard start, so it
//! is where the one-king-per-color invariant is enforced: the king-location
//! cache backs every legality query and must point at a real king.
//!
//! # Example
//! ```
//! use chess_rules::{Color, Piece, PositionBuilder, Square};
//!
//! let mut game = PositionBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .piece(Square(6, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//!
//! assert!(!game.legal_moves().is_empty());
//! ```

use super::error::PositionError;
use super::state::GameState;
use super::types::{CastlingRights, Color, Piece, Square};

/// A fluent builder for [`GameState`] positions.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create an empty builder with no pieces and no castling rights.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
        }
    }

    /// Create a builder holding the standard starting position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (col, &piece) in back_rank.iter().enumerate() {
            builder.pieces.push((Square(0, col), Color::Black, piece));
            builder
                .pieces
                .push((Square(1, col), Color::Black, Piece::Pawn));
            builder
                .pieces
                .push((Square(6, col), Color::White, Piece::Pawn));
            builder.pieces.push((Square(7, col), Color::White, piece));
        }
        builder.castling_rights = CastlingRights::all();
        builder
    }

    /// Place a piece, replacing whatever was on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set all four castling rights at once.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Grant every castling right.
    #[must_use]
    pub const fn all_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::all();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Build the game state, validating that each color has exactly one
    /// king.
    pub fn build(self) -> Result<GameState, PositionError> {
        let mut state = GameState::empty();

        for &(square, color, piece) in &self.pieces {
            state.board[square.0][square.1] = Some((color, piece));
        }

        for color in Color::BOTH {
            let mut kings = self
                .pieces
                .iter()
                .filter(|&&(_, c, p)| c == color && p == Piece::King)
                .map(|&(sq, _, _)| sq);
            let Some(king) = kings.next() else {
                return Err(PositionError::MissingKing { color });
            };
            if kings.next().is_some() {
                return Err(PositionError::DuplicateKing { color });
            }
            state.king_location[color.index()] = king;
        }

        state.white_to_move = self.side_to_move == Color::White;
        state.castling_rights = self.castling_rights;
        state.en_passant_target = self.en_passant_target;
        Ok(state)
    }
}
