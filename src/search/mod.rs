//! Exhaustive tour search with live progress and cooperative cancellation.
//!
//! - [`SearchEngine`] — Brute-force search over all `(n-1)!` closed tours
//! - [`CancellationToken`] — One-shot stop signal polled between tours
//! - [`ProgressSnapshot`] — Consistent read of best/last tour and counters
//! - [`SearchHandle`] — Runs an engine on a dedicated thread
//! - [`SearchConfig`] — Logging interval and worker thread name

mod cancel;
mod config;
mod engine;
mod progress;
mod worker;

pub use cancel::CancellationToken;
pub use config::SearchConfig;
pub use engine::SearchEngine;
pub use progress::{ProgressSnapshot, SearchStatus};
pub use worker::SearchHandle;
