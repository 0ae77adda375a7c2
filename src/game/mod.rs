//! Chess rules engine: authoritative game state and legal move generation.
//!
//! One mutable [`GameState`] tracks the board, the side to move, castling
//! rights, the en-passant target, and the move history. Legality comes from
//! a single pin/check scan per query rather than per-move make/unmake
//! testing. Supports full rules: checks, pins, castling, en passant, and
//! (auto-queen) promotion.
//!
//! # Example
//! ```
//! use chess_rules::game::GameState;
//!
//! let mut game = GameState::new();
//! assert_eq!(game.legal_moves().len(), 20);
//! ```

mod attack_tables;
mod builder;
mod error;
mod make_undo;
mod movegen;
mod notation;
mod scanner;
mod state;
mod types;


pub use builder::PositionBuilder;
pub use error::{MoveError, PositionError, SquareError};
pub use state::GameState;
pub use types::{CastlingRights, Color, Move, MoveList, Piece, Square};
