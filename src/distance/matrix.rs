//! Dense distance matrix.

use crate::models::Point;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once per search so the inner loop reads leg lengths instead of
/// recomputing square roots.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::DistanceMatrix;
///
/// let cities = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 4.0),
///     Point::new(6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_points(&cities);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the Euclidean distance matrix of a City Set.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The longest leg between two distinct cities, as `(from, to, distance)`.
    /// `None` for fewer than two cities.
    pub(crate) fn longest_leg(&self) -> Option<(usize, usize, f64)> {
        let mut longest: Option<(usize, usize, f64)> = None;
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let d = self.get(i, j);
                if longest.map_or(true, |(_, _, best)| d > best) {
                    longest = Some((i, j, d));
                }
            }
        }
        longest
    }

    /// Sums the legs of `path` in order. Paths with fewer than two stops
    /// have length zero.
    ///
    /// # Panics
    ///
    /// Panics if any stop is out of bounds.
    pub fn path_length(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}
