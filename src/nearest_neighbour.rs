//! A result item returned by a nearest-neighbour query

use std::cmp::Ordering;

use crate::geom::{Axis, Point};

/// Represents the result of a nearest neighbour query, with `distance` being the distance
/// of the found point from the query point under the metric the query ran with, and
/// `point` being the stored point that was found.
#[derive(Debug, Copy, Clone)]
pub struct NearestNeighbour<A> {
    /// the distance of the found point from the query point according to the supplied distance metric
    pub distance: A,
    /// the stored point that was found by the query
    pub point: Point<A>,
}

impl<A: Axis> Ord for NearestNeighbour<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

#[allow(unknown_lints)]
#[allow(clippy::non_canonical_partial_ord_impl)]
impl<A: Axis> PartialOrd for NearestNeighbour<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.distance.partial_cmp(&other.distance)
    }
}

impl<A: Axis> Eq for NearestNeighbour<A> {}

impl<A: Axis> PartialEq for NearestNeighbour<A> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.point == other.point
    }
}

impl<A: Axis> From<NearestNeighbour<A>> for (A, Point<A>) {
    fn from(elem: NearestNeighbour<A>) -> Self {
        (elem.distance, elem.point)
    }
}
