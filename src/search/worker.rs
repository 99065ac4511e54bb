//! Running a search on its own thread.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::error::SearchError;
use crate::models::Tour;

use super::cancel::CancellationToken;
use super::engine::SearchEngine;
use super::progress::ProgressSnapshot;

/// A search running on a dedicated thread.
///
/// Each handle owns a fresh [`CancellationToken`]. Dropping the handle
/// cancels the run but does not wait for the thread to exit; call
/// [`join`](Self::join) to wait for the result.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::search::{SearchEngine, SearchHandle, SearchStatus};
///
/// let engine = SearchEngine::new(&[
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ]);
/// let handle = SearchHandle::spawn(engine).unwrap();
/// let engine = handle.engine().clone();
/// let best = handle.join();
///
/// assert_eq!(best.len(), 5);
/// assert_eq!(engine.status(), SearchStatus::Completed);
/// ```
#[derive(Debug)]
pub struct SearchHandle {
    engine: Arc<SearchEngine>,
    cancel: CancellationToken,
    thread: Option<JoinHandle<Tour>>,
}

impl SearchHandle {
    /// Starts `engine.run` on a new thread named after the engine's config.
    pub fn spawn(engine: SearchEngine) -> Result<Self, SearchError> {
        let engine = Arc::new(engine);
        let cancel = CancellationToken::new();

        let worker_engine = Arc::clone(&engine);
        let worker_cancel = cancel.clone();
        let thread = thread::Builder::new()
            .name(engine.config().thread_name.clone())
            .spawn(move || worker_engine.run(&worker_cancel))
            .map_err(SearchError::Spawn)?;

        debug!(
            event = "worker_spawned",
            thread = %engine.config().thread_name,
            city_count = engine.city_count(),
        );
        Ok(Self {
            engine,
            cancel,
            thread: Some(thread),
        })
    }

    /// The engine being run, for direct observation.
    pub fn engine(&self) -> &Arc<SearchEngine> {
        &self.engine
    }

    /// The token this run polls.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Asks the search to stop at its next permutation boundary.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Current progress of the run.
    pub fn snapshot(&self) -> ProgressSnapshot {
        self.engine.snapshot()
    }

    /// Returns `true` once the search thread has exited.
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Waits for the search to end and returns its best tour.
    ///
    /// A panic on the search thread is propagated to the caller.
    pub fn join(mut self) -> Tour {
        match self.thread.take() {
            Some(thread) => match thread.join() {
                Ok(tour) => tour,
                Err(payload) => std::panic::resume_unwind(payload),
            },
            None => (*self.engine.best_tour()).clone(),
        }
    }
}

impl Drop for SearchHandle {
    fn drop(&mut self) {
        if self.thread.is_some() {
            self.cancel.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    use crate::models::Point;
    use crate::search::{SearchConfig, SearchStatus};

    #[test]
    fn test_spawn_and_join() {
        let engine = SearchEngine::new(&[
            Point::new(0.0, 0.0),
            Point::new(0.0, 3.0),
            Point::new(4.0, 0.0),
        ]);
        let handle = SearchHandle::spawn(engine).expect("spawn");
        let engine = Arc::clone(handle.engine());
        let best = handle.join();
        assert_eq!(best.stops(), &[0, 1, 2, 0]);
        assert_eq!(engine.tried_count(), 2);
        assert_eq!(engine.status(), SearchStatus::Completed);
    }

    #[test]
    fn test_thread_name_from_config() {
        let engine = SearchEngine::with_config(
            &[Point::new(0.0, 0.0)],
            SearchConfig::default().with_thread_name("named-search"),
        );
        let handle = SearchHandle::spawn(engine).expect("spawn");
        assert_eq!(handle.engine().config().thread_name, "named-search");
        assert_eq!(handle.join().stops(), &[0]);
    }

    #[test]
    fn test_is_finished_after_completion() {
        let engine = SearchEngine::new(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        let handle = SearchHandle::spawn(engine).expect("spawn");
        let deadline = Instant::now() + Duration::from_secs(10);
        while !handle.is_finished() {
            assert!(Instant::now() < deadline, "worker never finished");
            thread::yield_now();
        }
        assert_eq!(handle.snapshot().status, SearchStatus::Completed);
        assert_eq!(handle.join().stops(), &[0, 1, 0]);
    }

    #[test]
    fn test_drop_cancels() {
        let engine = SearchEngine::new(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        let handle = SearchHandle::spawn(engine).expect("spawn");
        let token = handle.cancellation_token().clone();
        drop(handle);
        assert!(token.is_cancelled());
    }
}
