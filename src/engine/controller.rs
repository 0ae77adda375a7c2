//! Search controller: runs a chooser against a private copy of the game
//! state and delivers the result asynchronously.
//!
//! The authoritative state is never shared with the worker. Each search
//! clones the position in, and the chosen move comes back over a channel;
//! the driving loop polls between frames. Cancelling (e.g. because the user
//! undid a move while the chooser was thinking) sets the stop flag and
//! joins the worker; a cancelled search never delivers a result.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use crate::game::{GameState, Move};

use super::chooser::MoveChooser;
use super::sync::StopFlag;

/// An in-flight search.
pub struct SearchJob {
    stop: StopFlag,
    rx: Receiver<Option<Move>>,
    handle: JoinHandle<()>,
}

impl SearchJob {
    /// Signal stop without waiting for the worker.
    pub fn signal_stop(&self) {
        self.stop.stop();
    }

    /// Stop the search and wait for the worker to finish.
    fn stop_and_wait(self) {
        self.stop.stop();
        let _ = self.handle.join();
    }
}

/// Manages one search at a time against cloned game states.
pub struct SearchController {
    /// Shared with the worker so a stateful chooser (e.g. its RNG) persists
    /// across searches.
    chooser: Arc<Mutex<Box<dyn MoveChooser>>>,
    current_job: Option<SearchJob>,
}

impl SearchController {
    #[must_use]
    pub fn new(chooser: Box<dyn MoveChooser>) -> Self {
        SearchController {
            chooser: Arc::new(Mutex::new(chooser)),
            current_job: None,
        }
    }

    /// Start a search on a clone of `state`, cancelling any search still in
    /// flight.
    pub fn start_search(&mut self, state: &GameState) {
        self.cancel();

        let stop = StopFlag::new();
        let (tx, rx) = mpsc::channel();
        let mut search_state = state.clone();
        let chooser = Arc::clone(&self.chooser);
        let worker_stop = stop.clone();

        let handle = thread::Builder::new()
            .name("move-chooser".to_string())
            .spawn(move || {
                let mut chooser = chooser.lock();
                let chosen = chooser.choose(&mut search_state);
                if worker_stop.is_stopped() {
                    log::debug!("{} search cancelled, result discarded", chooser.name());
                    return;
                }
                log::debug!(
                    "{} search finished: {}",
                    chooser.name(),
                    chosen.map_or_else(|| "no move".to_string(), |m| m.to_string())
                );
                let _ = tx.send(chosen);
            })
            .expect("failed to spawn chooser thread");

        log::debug!("search started for {}", state.side_to_move());
        self.current_job = Some(SearchJob { stop, rx, handle });
    }

    /// Non-blocking poll for the search result.
    ///
    /// Returns `None` while the search is still running (or none is);
    /// `Some(result)` once the chooser has answered, where `result` is its
    /// chosen move or `None` for "no move selected".
    pub fn poll(&mut self) -> Option<Option<Move>> {
        let job = self.current_job.as_ref()?;
        match job.rx.try_recv() {
            Ok(result) => {
                if let Some(job) = self.current_job.take() {
                    let _ = job.handle.join();
                }
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                // Worker exited without sending (stopped or died); forget it.
                self.current_job = None;
                None
            }
        }
    }

    /// Cancel any pending search and wait for its worker to exit. The
    /// discarded search's result is never delivered.
    pub fn cancel(&mut self) {
        if let Some(job) = self.current_job.take() {
            log::debug!("cancelling pending search");
            job.stop_and_wait();
        }
    }

    /// Whether a search is currently in flight.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.current_job.is_some()
    }
}
