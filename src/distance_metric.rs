//! The trait that needs to be implemented by any distance metrics

use crate::geom::{Axis, Point};

/// Trait that needs to be implemented by any potential distance
/// metric to be used within queries
pub trait DistanceMetric<A: Axis> {
    /// returns the distance between two points, as measured
    /// by a particular distance metric
    fn dist(a: &Point<A>, b: &Point<A>) -> A;

    /// returns the distance between two values along a single axis,
    /// as measured by a particular distance metric.
    ///
    /// (needs to be implemented as it is used by the NN query as the
    /// distance from the query point to a node's splitting line when
    /// deciding whether the far subtree could hold a closer point)
    fn dist1(a: A, b: A) -> A;
}
