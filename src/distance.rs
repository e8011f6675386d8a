//! Contains a selection of distance metrics that can be chosen from to measure the distance
//! between two points stored inside the tree.

use crate::distance_metric::DistanceMetric;
use crate::geom::{Axis, Point};

/// Returns the Manhattan / "taxi cab" distance between two points.
///
/// Faster than squared Euclidean due to not needing any multiplication.
///
/// # Examples
///
/// ```rust
/// use planekd::distance::Manhattan;
/// use planekd::{DistanceMetric, Point};
///
/// assert_eq!(0f32, Manhattan::dist(&Point::new(0f32, 0f32), &Point::new(0f32, 0f32)));
/// assert_eq!(1f32, Manhattan::dist(&Point::new(0f32, 0f32), &Point::new(1f32, 0f32)));
/// assert_eq!(2f32, Manhattan::dist(&Point::new(0f32, 0f32), &Point::new(1f32, 1f32)));
/// ```
pub struct Manhattan {}

impl<A: Axis> DistanceMetric<A> for Manhattan {
    #[inline]
    fn dist(a: &Point<A>, b: &Point<A>) -> A {
        (a.x - b.x).abs() + (a.y - b.y).abs()
    }

    #[inline]
    fn dist1(a: A, b: A) -> A {
        (a - b).abs()
    }
}

/// Returns the squared euclidean distance between two points.
///
/// Faster than Euclidean distance due to not needing a square root, but still
/// preserves the same distance ordering as with Euclidean distance.
///
/// # Examples
///
/// ```rust
/// use planekd::distance::SquaredEuclidean;
/// use planekd::{DistanceMetric, Point};
///
/// assert_eq!(0f32, SquaredEuclidean::dist(&Point::new(0f32, 0f32), &Point::new(0f32, 0f32)));
/// assert_eq!(1f32, SquaredEuclidean::dist(&Point::new(0f32, 0f32), &Point::new(1f32, 0f32)));
/// assert_eq!(2f32, SquaredEuclidean::dist(&Point::new(0f32, 0f32), &Point::new(1f32, 1f32)));
/// ```
pub struct SquaredEuclidean {}

impl<A: Axis> DistanceMetric<A> for SquaredEuclidean {
    #[inline]
    fn dist(a: &Point<A>, b: &Point<A>) -> A {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        dx * dx + dy * dy
    }

    #[inline]
    fn dist1(a: A, b: A) -> A {
        (a - b) * (a - b)
    }
}
