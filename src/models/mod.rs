//! Domain model types for tour search.
//!
//! A City Set is a plain `&[Point]`; index 0 is the start and end of every
//! [`Tour`].

mod point;
mod tour;

pub use point::{random_points, Point};
pub use tour::Tour;
