//! # u-tsp
//!
//! Exhaustive travelling salesman search. Every closed tour over a small
//! City Set is enumerated and measured while the current best and the most
//! recently tried tour stay readable from other threads.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Tour)
//! - [`distance`] — Euclidean distance matrix
//! - [`permutation`] — Lazy permutation generator and permutation counts
//! - [`search`] — Search engine, cancellation, progress snapshots, worker thread
//! - [`error`] — Error types

pub mod distance;
pub mod error;
pub mod models;
pub mod permutation;
pub mod search;
