//! The seam between the rules engine and an external move-selection
//! component.

use rand::prelude::*;

use crate::game::{GameState, Move};

/// A move-selection collaborator.
///
/// Implementations receive a private game state (the controller hands each
/// search a clone of the authoritative one) and are free to explore lines
/// with `apply_move`/`undo_move` on it. Returning `None` signals that no
/// move was selected; the caller falls back to any legal move.
pub trait MoveChooser: Send {
    /// Pick one of the state's legal moves, or `None`.
    fn choose(&mut self, state: &mut GameState) -> Option<Move>;

    /// Name for logging.
    fn name(&self) -> &'static str;
}

/// Uniformly random choice over the legal moves — the fallback chooser.
pub struct RandomChooser {
    rng: StdRng,
}

impl RandomChooser {
    #[must_use]
    pub fn new() -> Self {
        RandomChooser {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic chooser for tests and reproducible games.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        RandomChooser {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomChooser {
    fn default() -> Self {
        RandomChooser::new()
    }
}

impl MoveChooser for RandomChooser {
    fn choose(&mut self, state: &mut GameState) -> Option<Move> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return None;
        }
        Some(moves[self.rng.gen_range(0..moves.len())])
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
