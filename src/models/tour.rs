//! Closed tour type.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::TourError;

/// A closed visiting order over a City Set.
///
/// For two or more cities a tour has `city_count + 1` stops, starts and ends
/// at city 0, and visits every other city exactly once. The degenerate City
/// Sets use `[]` (no cities) and `[0]` (one city).
///
/// Tours are values: the search engine never edits a tour it has published,
/// it replaces it.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1, 0], 3).unwrap();
/// assert_eq!(tour.len(), 4);
/// assert_eq!(tour.legs().collect::<Vec<_>>(), vec![(0, 2), (2, 1), (1, 0)]);
///
/// assert!(Tour::new(vec![0, 1, 1, 0], 3).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tour {
    stops: Vec<usize>,
}

impl Tour {
    /// Validates `stops` as a closed tour over `city_count` cities.
    pub fn new(stops: Vec<usize>, city_count: usize) -> Result<Self, TourError> {
        let expected = match city_count {
            0 => 0,
            1 => 1,
            n => n + 1,
        };
        if stops.len() != expected {
            return Err(TourError::WrongLength {
                expected,
                actual: stops.len(),
            });
        }
        if let Some(&index) = stops.iter().find(|&&i| i >= city_count) {
            return Err(TourError::IndexOutOfRange { index, city_count });
        }
        if city_count >= 2 {
            if stops[0] != 0 || stops[expected - 1] != 0 {
                return Err(TourError::NotClosed);
            }
            let mut seen = vec![false; city_count];
            seen[0] = true;
            for &index in &stops[1..expected - 1] {
                if seen[index] {
                    return Err(TourError::Repeated { index });
                }
                seen[index] = true;
            }
        }
        Ok(Self { stops })
    }

    /// The tour over an empty City Set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The tour over a single-city City Set: `[0]`.
    pub fn single() -> Self {
        Self { stops: vec![0] }
    }

    /// Wraps an ordering of cities `1..n` into `[0, order.., 0]`.
    ///
    /// The caller guarantees `order` is a permutation of `1..n`.
    pub(crate) fn closed_from_order(order: &[usize]) -> Self {
        let mut stops = Vec::with_capacity(order.len() + 2);
        stops.push(0);
        stops.extend_from_slice(order);
        stops.push(0);
        Self { stops }
    }

    /// City indices in visit order.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Number of stops, including the return to the start.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` for the empty tour.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Consecutive `(from, to)` pairs along the tour.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }

    /// Total length of the tour under the given distances.
    pub fn length(&self, distances: &DistanceMatrix) -> f64 {
        distances.path_length(&self.stops)
    }

    /// The same cycle traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut stops = self.stops.clone();
        stops.reverse();
        Self { stops }
    }
}

impl AsRef<[usize]> for Tour {
    fn as_ref(&self) -> &[usize] {
        &self.stops
    }
}
