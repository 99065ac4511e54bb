//! Exhaustive tour search.
//!
//! # Algorithm
//!
//! City 0 is fixed as the start and end. Every ordering of cities `1..n` is
//! generated lazily, wrapped into `[0, .., 0]`, and measured with the
//! Euclidean distance matrix. The shortest tour seen so far is kept; ties
//! keep the earlier tour.
//!
//! # Complexity
//!
//! O((n-1)! · n) time, O(n²) memory for the distance matrix.
//!
//! # Concurrency
//!
//! `run` takes `&self`, so an engine behind an `Arc` can be run on one
//! thread and observed from others. Each evaluated tour is published in one
//! short write-lock section; observers take the read side and never see a
//! half-updated combination of counters and tours.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, trace};

use crate::distance::DistanceMatrix;
use crate::error::SearchError;
use crate::models::{Point, Tour};
use crate::permutation::{permutation_count, Permutations};

use super::cancel::CancellationToken;
use super::config::SearchConfig;
use super::progress::{Progress, ProgressSnapshot, SearchStatus};

/// Brute-force search for the shortest closed tour over a City Set.
///
/// The City Set is copied at construction and never changes afterwards.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::search::{CancellationToken, SearchEngine, SearchStatus};
///
/// let engine = SearchEngine::new(&[
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 3.0),
///     Point::new(4.0, 0.0),
/// ]);
/// let best = engine.run(&CancellationToken::new());
///
/// assert_eq!(best.stops(), &[0, 1, 2, 0]);
/// assert!((engine.best_length() - 12.0).abs() < 1e-10);
/// assert_eq!(engine.tried_count(), 2);
/// assert_eq!(engine.status(), SearchStatus::Completed);
/// ```
#[derive(Debug)]
pub struct SearchEngine {
    cities: Vec<Point>,
    distances: DistanceMatrix,
    config: SearchConfig,
    total: u64,
    progress: RwLock<Progress>,
    run_guard: Mutex<()>,
}

impl SearchEngine {
    /// Creates an engine with the default configuration.
    ///
    /// # Panics
    ///
    /// Panics if any city has a non-finite coordinate, or if cities are so
    /// far apart that a tour length would overflow.
    pub fn new(cities: &[Point]) -> Self {
        Self::with_config(cities, SearchConfig::default())
    }

    /// Creates an engine with an explicit configuration.
    ///
    /// # Panics
    ///
    /// Panics if any city has a non-finite coordinate, a tour length would
    /// overflow, or the configuration is invalid. Use
    /// [`try_with_config`](Self::try_with_config) to handle these as errors.
    pub fn with_config(cities: &[Point], config: SearchConfig) -> Self {
        match Self::try_with_config(cities, config) {
            Ok(engine) => engine,
            Err(e) => panic!("invalid search input: {e}"),
        }
    }

    /// Fallible form of [`new`](Self::new).
    pub fn try_new(cities: &[Point]) -> Result<Self, SearchError> {
        Self::try_with_config(cities, SearchConfig::default())
    }

    /// Fallible form of [`with_config`](Self::with_config).
    pub fn try_with_config(cities: &[Point], config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        if let Some((index, p)) = cities.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(SearchError::NonFiniteCoordinate {
                index,
                x: p.x(),
                y: p.y(),
            });
        }
        let cities = cities.to_vec();
        let distances = DistanceMatrix::from_points(&cities);
        if let Some((from, to, longest)) = distances.longest_leg() {
            // Every tour has `n` legs, so this bounds any tour length.
            if !(longest * cities.len() as f64).is_finite() {
                return Err(SearchError::NonFiniteDistance { from, to });
            }
        }
        Ok(Self {
            distances,
            total: permutation_count(cities.len()),
            cities,
            config,
            progress: RwLock::new(Progress::idle()),
            run_guard: Mutex::new(()),
        })
    }

    /// The engine's own copy of the City Set.
    pub fn cities(&self) -> &[Point] {
        &self.cities
    }

    /// Number of cities.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Pairwise distances used to measure tours.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Configuration this engine was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Number of tours a complete run evaluates, saturated at `u64::MAX`.
    pub fn permutation_count(&self) -> u64 {
        self.total
    }

    /// Runs the search to completion or until `cancel` is set, and returns
    /// the best tour found.
    ///
    /// Cancellation is polled once per permutation, before it is evaluated.
    /// Each call starts from a clean state; concurrent calls on the same
    /// engine run one after the other.
    ///
    /// An empty City Set yields `[]` and a single city yields `[0]`; neither
    /// evaluates any tour.
    pub fn run(&self, cancel: &CancellationToken) -> Tour {
        let _guard = self.run_guard.lock();
        self.progress.write().start();

        info!(
            event = "search_start",
            city_count = self.cities.len(),
            permutation_count = self.total,
        );

        let status = match self.cities.len() {
            0 => SearchStatus::Completed,
            1 => {
                self.progress.write().set_trivial_best(Tour::single());
                SearchStatus::Completed
            }
            n => self.search(n, cancel),
        };

        let mut progress = self.progress.write();
        progress.finish(status);
        info!(
            event = "search_end",
            status = %status,
            tried = progress.tried,
            improvements = progress.improvements,
            best_length = progress.best_length,
            elapsed_ms = u64::try_from(progress.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        (*progress.best_tour).clone()
    }

    fn search(&self, n: usize, cancel: &CancellationToken) -> SearchStatus {
        let interval = self.config.progress_log_interval;

        for order in Permutations::new((1..n).collect::<Vec<_>>()) {
            if cancel.is_cancelled() {
                return SearchStatus::Cancelled;
            }
            let tour = Arc::new(Tour::closed_from_order(&order));
            let length = tour.length(&self.distances);

            let mut progress = self.progress.write();
            if progress.record(tour, length) {
                trace!(
                    event = "improvement",
                    tried = progress.tried,
                    best_length = length,
                );
            }
            if interval > 0 && progress.tried % interval == 0 {
                debug!(
                    event = "search_progress",
                    tried = progress.tried,
                    improvements = progress.improvements,
                    best_length = progress.best_length,
                );
            }
        }
        SearchStatus::Completed
    }

    /// Shortest tour found so far.
    pub fn best_tour(&self) -> Arc<Tour> {
        Arc::clone(&self.progress.read().best_tour)
    }

    /// Euclidean length of [`best_tour`](Self::best_tour); infinite until a
    /// tour has been evaluated.
    pub fn best_length(&self) -> f64 {
        self.progress.read().best_length
    }

    /// Most recently evaluated tour.
    pub fn last_tried_tour(&self) -> Arc<Tour> {
        Arc::clone(&self.progress.read().last_tried)
    }

    /// Tours evaluated in the current (or last) run.
    pub fn tried_count(&self) -> u64 {
        self.progress.read().tried
    }

    /// Times the best tour was replaced in the current (or last) run.
    pub fn improvement_count(&self) -> u64 {
        self.progress.read().improvements
    }

    /// Wall-clock time of the current (or last) run.
    pub fn elapsed(&self) -> Duration {
        self.progress.read().elapsed()
    }

    /// Run state.
    pub fn status(&self) -> SearchStatus {
        self.progress.read().status
    }

    /// All progress fields, read together.
    pub fn snapshot(&self) -> ProgressSnapshot {
        self.progress.read().snapshot(self.total)
    }
}
