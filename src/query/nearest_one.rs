use az::Az;
use std::ops::Rem;

use crate::distance_metric::DistanceMetric;
use crate::error::{check_point, InvalidArgument};
use crate::geom::{Axis, Point};
use crate::kdtree::{KdTree, K};
use crate::nearest_neighbour::NearestNeighbour;
use crate::types::Index;

impl<A: Axis, IDX: Index> KdTree<A, IDX> {
    /// Queries the tree to find the stored point nearest to `query`,
    /// using the specified distance metric.
    ///
    /// Returns `Ok(None)` iff the tree is empty. Among equidistant
    /// candidates the result is the first one found by the traversal,
    /// which descends the query point's own side of every split before
    /// the far side, so it is deterministic for a given insertion
    /// sequence.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument`] if either co-ordinate of `query` is NaN or
    /// infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planekd::{KdTree, Point, SquaredEuclidean};
    ///
    /// let mut tree: KdTree<f64> = KdTree::new();
    ///
    /// tree.insert(Point::new(0.2, 0.3))?;
    /// tree.insert(Point::new(0.9, 0.6))?;
    ///
    /// let nearest = tree.nearest_one::<SquaredEuclidean>(&Point::new(0.2, 0.17))?.unwrap();
    ///
    /// assert_eq!(nearest.point, Point::new(0.2, 0.3));
    /// assert!((nearest.distance - 0.0169).abs() < f64::EPSILON);
    /// # Ok::<(), planekd::InvalidArgument>(())
    /// ```
    pub fn nearest_one<D>(
        &self,
        query: &Point<A>,
    ) -> Result<Option<NearestNeighbour<A>>, InvalidArgument>
    where
        D: DistanceMetric<A>,
    {
        check_point(query)?;

        if self.root == <IDX as Index>::max() {
            return Ok(None);
        }

        let best = self.nearest_one_recurse::<D>(
            query,
            self.root,
            0,
            NearestNeighbour {
                distance: A::infinity(),
                point: Point::default(),
            },
        );

        Ok(Some(best))
    }

    fn nearest_one_recurse<D>(
        &self,
        query: &Point<A>,
        idx: IDX,
        dim: usize,
        mut best: NearestNeighbour<A>,
    ) -> NearestNeighbour<A>
    where
        D: DistanceMetric<A>,
    {
        let node = &self.nodes[idx.az::<usize>()];
        let next_dim = (dim + 1).rem(K);

        let [near, far] = if query.coord(dim) < node.point.coord(dim) {
            [node.lower, node.upper]
        } else {
            [node.upper, node.lower]
        };

        if near != <IDX as Index>::max() {
            best = self.nearest_one_recurse::<D>(query, near, next_dim, best);
        }

        // every point of the far subtree is at least as far from the
        // query as the splitting line on this axis alone, so the far
        // side only matters if the line itself beats the current best
        let line_dist = D::dist1(query.coord(dim), node.point.coord(dim));
        if line_dist < best.distance && far != <IDX as Index>::max() {
            best = self.nearest_one_recurse::<D>(query, far, next_dim, best);
        }

        let dist = D::dist(query, &node.point);
        if dist < best.distance {
            best = NearestNeighbour {
                distance: dist,
                point: node.point,
            };
        }

        best
    }
}
