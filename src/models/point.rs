//! City coordinates.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A city location in the plane.
///
/// Cities are identified by their position in the City Set, not by value:
/// two cities with identical coordinates are still distinct stops.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Scatters `count` cities uniformly over `[0, width) x [0, height)`.
///
/// A non-positive extent collapses that axis to `0.0`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tsp::models::random_points;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let cities = random_points(5, 800.0, 600.0, &mut rng);
/// assert_eq!(cities.len(), 5);
/// assert!(cities.iter().all(|p| p.x() < 800.0 && p.y() < 600.0));
/// ```
pub fn random_points<R: Rng + ?Sized>(
    count: usize,
    width: f64,
    height: f64,
    rng: &mut R,
) -> Vec<Point> {
    (0..count)
        .map(|_| Point::new(sample_axis(width, rng), sample_axis(height, rng)))
        .collect()
}

fn sample_axis<R: Rng + ?Sized>(extent: f64, rng: &mut R) -> f64 {
    if extent > 0.0 {
        rng.random_range(0.0..extent)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_point_new() {
        let p = Point::new(1.5, -2.0);
        assert_eq!(p.x(), 1.5);
        assert_eq!(p.y(), -2.0);
        assert!(p.is_finite());
    }

    #[test]
    fn test_point_non_finite() {
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-10);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_distance_large_coordinates() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3e200, 4e200);
        let d = a.distance_to(&b);
        assert!(d.is_finite());
        assert!((d / 5e200 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_tuple() {
        let p: Point = (3.0, 4.0).into();
        assert_eq!(p, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_random_points_reproducible() {
        let a = random_points(20, 100.0, 50.0, &mut StdRng::seed_from_u64(42));
        let b = random_points(20, 100.0, 50.0, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        for p in &a {
            assert!((0.0..100.0).contains(&p.x()));
            assert!((0.0..50.0).contains(&p.y()));
        }
    }

    #[test]
    fn test_random_points_degenerate_extent() {
        let pts = random_points(3, 0.0, -1.0, &mut StdRng::seed_from_u64(1));
        assert!(pts.iter().all(|p| p.x() == 0.0 && p.y() == 0.0));
    }
}
