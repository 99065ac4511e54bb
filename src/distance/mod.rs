//! Distance matrices.
//!
//! Provides a dense Euclidean distance matrix over a City Set.

mod matrix;

pub use matrix::DistanceMatrix;
