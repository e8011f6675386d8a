use az::Az;
use std::ops::Rem;

use crate::error::{check_rect, InvalidArgument};
use crate::geom::{Axis, Point, Rect};
use crate::kdtree::{KdTree, K};
use crate::types::Index;

impl<A: Axis, IDX: Index> KdTree<A, IDX> {
    /// Returns every stored point inside `query`, boundary included.
    ///
    /// Points come back in tree order: deterministic for a given
    /// insertion sequence, but otherwise unspecified, with no
    /// duplicates. Subtrees whose region cannot intersect `query` are
    /// never visited.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument`] if any boundary co-ordinate of `query` is
    /// NaN or infinite, or its extent is inverted on either axis.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planekd::{KdTree, Point, Rect};
    ///
    /// let mut tree: KdTree<f64> = KdTree::new();
    ///
    /// tree.insert(Point::new(0.25, 0.25))?;
    /// tree.insert(Point::new(0.5, 0.5))?;
    /// tree.insert(Point::new(0.9, 0.9))?;
    ///
    /// let found = tree.range(&Rect::new(0.0, 0.0, 0.5, 0.5))?;
    ///
    /// assert_eq!(found.len(), 2);
    /// # Ok::<(), planekd::InvalidArgument>(())
    /// ```
    pub fn range(&self, query: &Rect<A>) -> Result<Vec<Point<A>>, InvalidArgument> {
        check_rect(query)?;

        let mut found = Vec::new();
        self.range_recurse(query, self.root, 0, Rect::everything(), &mut found);

        Ok(found)
    }

    /// `bound` is the region implied by the routing decisions from the
    /// root down to `idx`, carried by value and cut at each node's
    /// co-ordinate on that node's axis. Every point of the subtree at
    /// `idx` lies inside `bound`, so a bound that misses `query` rules
    /// the whole subtree out.
    fn range_recurse(
        &self,
        query: &Rect<A>,
        idx: IDX,
        dim: usize,
        bound: Rect<A>,
        found: &mut Vec<Point<A>>,
    ) {
        if idx == <IDX as Index>::max() {
            return;
        }

        let node = &self.nodes[idx.az::<usize>()];
        let point = node.point;
        let (lower_bound, upper_bound) = bound.split(dim, point.coord(dim));
        let next_dim = (dim + 1).rem(K);

        let mut tested = false;
        if query.intersects(&lower_bound) {
            tested = true;
            if query.contains(&point) {
                found.push(point);
            }
            self.range_recurse(query, node.lower, next_dim, lower_bound, found);
        }
        if query.intersects(&upper_bound) {
            // the node's own point sits on the cut line shared by both
            // halves; test it once no matter which sides matched
            if !tested && query.contains(&point) {
                found.push(point);
            }
            self.range_recurse(query, node.upper, next_dim, upper_bound, found);
        }
    }
}
