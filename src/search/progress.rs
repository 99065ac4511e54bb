//! Live search state and the snapshots observers read from it.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::models::Tour;

/// Lifecycle of one run: `Idle → Running → {Completed | Cancelled}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// Constructed, never run.
    Idle,
    /// `run` is executing.
    Running,
    /// Every permutation was evaluated.
    Completed,
    /// Stopped early by the cancellation token.
    Cancelled,
}

impl SearchStatus {
    /// Returns `true` for `Completed` and `Cancelled`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// Mutable state of a run. Written only by the thread executing `run`.
#[derive(Debug)]
pub(crate) struct Progress {
    pub(crate) status: SearchStatus,
    pub(crate) best_tour: Arc<Tour>,
    pub(crate) best_length: f64,
    pub(crate) last_tried: Arc<Tour>,
    pub(crate) tried: u64,
    pub(crate) improvements: u64,
    started_at: Option<Instant>,
    finished_after: Option<Duration>,
}

impl Progress {
    pub(crate) fn idle() -> Self {
        Self {
            status: SearchStatus::Idle,
            best_tour: Arc::new(Tour::empty()),
            best_length: f64::INFINITY,
            last_tried: Arc::new(Tour::empty()),
            tried: 0,
            improvements: 0,
            started_at: None,
            finished_after: None,
        }
    }

    /// Clears every field and starts the clock.
    pub(crate) fn start(&mut self) {
        *self = Self::idle();
        self.status = SearchStatus::Running;
        self.started_at = Some(Instant::now());
    }

    /// Records an evaluated tour. Returns `true` if it became the new best.
    ///
    /// Ties keep the earlier tour.
    pub(crate) fn record(&mut self, tour: Arc<Tour>, length: f64) -> bool {
        self.last_tried = Arc::clone(&tour);
        self.tried += 1;
        if length < self.best_length {
            self.best_tour = tour;
            self.best_length = length;
            self.improvements += 1;
            true
        } else {
            false
        }
    }

    /// Installs a best tour without counting it as an evaluation.
    pub(crate) fn set_trivial_best(&mut self, tour: Tour) {
        self.best_tour = Arc::new(tour);
        self.best_length = 0.0;
    }

    pub(crate) fn finish(&mut self, status: SearchStatus) {
        self.status = status;
        self.finished_after = Some(self.started_at.map(|t| t.elapsed()).unwrap_or_default());
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.finished_after
            .or_else(|| self.started_at.map(|t| t.elapsed()))
            .unwrap_or_default()
    }

    pub(crate) fn snapshot(&self, total: u64) -> ProgressSnapshot {
        ProgressSnapshot {
            status: self.status,
            best_tour: Arc::clone(&self.best_tour),
            best_length: self.best_length,
            last_tried: Arc::clone(&self.last_tried),
            tried: self.tried,
            improvements: self.improvements,
            total,
            elapsed: self.elapsed(),
        }
    }
}

/// A consistent view of a search, taken under a single lock acquisition.
///
/// The rate and estimate helpers reproduce the figures a progress display
/// shows: share of the permutation space covered, tours per second, and the
/// time left at the current rate.
#[derive(Debug, Clone)]
pub struct ProgressSnapshot {
    /// Run state when the snapshot was taken.
    pub status: SearchStatus,
    /// Shortest tour found so far (empty before the first evaluation).
    pub best_tour: Arc<Tour>,
    /// Euclidean length of `best_tour`; infinite before the first evaluation.
    pub best_length: f64,
    /// Most recently evaluated tour.
    pub last_tried: Arc<Tour>,
    /// Tours evaluated.
    pub tried: u64,
    /// Times the best tour was replaced.
    pub improvements: u64,
    /// Size of the permutation space, saturated at `u64::MAX`.
    pub total: u64,
    /// Wall-clock time spent in the run.
    pub elapsed: Duration,
}

impl ProgressSnapshot {
    /// Share of the permutation space evaluated, in `[0, 1]`.
    ///
    /// Zero when there is nothing to evaluate.
    pub fn fraction_complete(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.tried as f64 / self.total as f64).min(1.0)
        }
    }

    /// Average evaluation rate over the run so far.
    pub fn tours_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.tried as f64 / secs
        } else {
            0.0
        }
    }

    /// Time left at the current rate. `None` until a rate is known, or if
    /// the estimate does not fit a `Duration`.
    pub fn estimated_remaining(&self) -> Option<Duration> {
        let rate = self.tours_per_second();
        if rate <= 0.0 {
            return None;
        }
        let left = self.total.saturating_sub(self.tried) as f64;
        Duration::try_from_secs_f64(left / rate).ok()
    }
}
