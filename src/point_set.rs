//! Brute-force reference implementation of the point-index contract,
//! backed by a linear scan over an unordered collection.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distance_metric::DistanceMetric;
use crate::error::{check_point, check_rect, InvalidArgument};
use crate::geom::{Axis, Point, Rect};
use crate::nearest_neighbour::NearestNeighbour;

/// A set of points in the plane answering the same queries as
/// [`KdTree`](crate::kdtree::KdTree) by scanning every stored point.
///
/// Every operation is O(n). The type exists as the correctness
/// baseline the tree is cross-checked against in tests; the tree never
/// consults it.
///
/// # Examples
///
/// ```rust
/// use planekd::{Point, PointSet, SquaredEuclidean};
///
/// let mut set: PointSet<f64> = PointSet::new();
///
/// set.insert(Point::new(0.1, 0.1))?;
/// set.insert(Point::new(0.7, 0.2))?;
///
/// let nearest = set.nearest_one::<SquaredEuclidean>(&Point::new(0.2, 0.2))?.unwrap();
/// assert_eq!(nearest.point, Point::new(0.1, 0.1));
/// # Ok::<(), planekd::InvalidArgument>(())
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet<A> {
    points: Vec<Point<A>>,
}

impl<A: Axis> PointSet<A> {
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        PointSet { points: Vec::new() }
    }

    /// Returns true iff no point has been inserted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of distinct points stored.
    #[inline]
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Adds `point` to the set, unless it is already present.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument`] if either co-ordinate of `point` is NaN or
    /// infinite.
    pub fn insert(&mut self, point: Point<A>) -> Result<(), InvalidArgument> {
        check_point(&point)?;

        if !self.points.contains(&point) {
            self.points.push(point);
        }

        Ok(())
    }

    /// Reports whether a point with exactly these co-ordinates is
    /// stored.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument`] if either co-ordinate of `point` is NaN or
    /// infinite.
    pub fn contains(&self, point: &Point<A>) -> Result<bool, InvalidArgument> {
        check_point(point)?;

        Ok(self.points.contains(point))
    }

    /// Returns every stored point inside `query`, boundary included,
    /// in insertion order.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument`] if any boundary co-ordinate of `query` is
    /// NaN or infinite, or its extent is inverted on either axis.
    pub fn range(&self, query: &Rect<A>) -> Result<Vec<Point<A>>, InvalidArgument> {
        check_rect(query)?;

        Ok(self
            .points
            .iter()
            .copied()
            .filter(|point| query.contains(point))
            .collect())
    }

    /// Returns the stored point nearest to `query` under the metric
    /// `D`, or `Ok(None)` iff the set is empty. Among equidistant
    /// candidates the earliest-inserted one wins.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument`] if either co-ordinate of `query` is NaN or
    /// infinite.
    pub fn nearest_one<D>(
        &self,
        query: &Point<A>,
    ) -> Result<Option<NearestNeighbour<A>>, InvalidArgument>
    where
        D: DistanceMetric<A>,
    {
        check_point(query)?;

        let mut best: Option<NearestNeighbour<A>> = None;
        for point in &self.points {
            let distance = D::dist(query, point);
            match best {
                Some(ref nearest) if nearest.distance <= distance => {}
                _ => {
                    best = Some(NearestNeighbour {
                        distance,
                        point: *point,
                    })
                }
            }
        }

        Ok(best)
    }

    /// Iterates over every stored point, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Point<A>> + '_ {
        self.points.iter().copied()
    }
}
