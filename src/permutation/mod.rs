//! Permutation enumeration.
//!
//! - [`Permutations`] — Lazy, exhaustive generator by recursive decomposition
//! - [`permutation_count`] — `(n-1)!` tour count for progress display

mod count;
mod generator;

pub use count::{checked_factorial, checked_permutation_count, permutation_count};
pub use generator::{permutations, Permutations};
