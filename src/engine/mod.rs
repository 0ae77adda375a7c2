//! Search-collaborator harness.
//!
//! The rules engine never chooses moves; an external component does, plugged
//! in through [`MoveChooser`]. [`SearchController`] runs a chooser on a
//! private clone of the authoritative state in a worker thread, delivers the
//! chosen move back over a channel, and supports cancellation when the
//! authoritative state changes underneath a pending search.

mod chooser;
mod controller;
mod sync;

pub use chooser::{MoveChooser, RandomChooser};
pub use controller::{SearchController, SearchJob};
pub use sync::StopFlag;
