pub mod engine;
pub mod game;

pub use engine::{MoveChooser, RandomChooser, SearchController, StopFlag};
pub use game::{
    CastlingRights, Color, GameState, Move, MoveError, MoveList, Piece, PositionBuilder,
    PositionError, Square, SquareError,
};
