//! A 2D k-d tree holding one point per node, with the splitting axis
//! alternating between x and y as the tree deepens.

use az::{Az, Cast};
use std::ops::Rem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "tracing")]
use tracing::{event, Level};

use crate::error::{check_point, InvalidArgument};
use crate::geom::{Axis, Point};
use crate::types::Index;

/// Number of co-ordinate axes; the splitting axis at depth `d` is `d % K`.
pub(crate) const K: usize = 2;

/// A 2D k-d tree over points in the unit square.
///
/// Each node stores one point and splits the plane at that point's
/// co-ordinate on the node's axis: x at the root, y one level down,
/// and so on alternately. A point being inserted or looked up descends
/// to the lower child when its co-ordinate on the current axis is
/// strictly less than the node's, to the upper child otherwise. The
/// chain of those decisions bounds every subtree to an axis-aligned
/// region, which is what lets [`range`](KdTree::range) and
/// [`nearest_one`](KdTree::nearest_one) skip subtrees wholesale.
///
/// Nodes live in a flat `Vec` and refer to their children by index, so
/// every node is owned by exactly one parent link and teardown is a
/// single buffer release. No rebalancing is performed: an adversarial
/// insertion order can degenerate the tree to a list, and expected
/// depth is logarithmic for random orders.
///
/// Insertion takes `&mut self` and queries take `&self`, so concurrent
/// mutation is ruled out at compile time rather than by locking.
///
/// # Examples
///
/// ```rust
/// use planekd::{KdTree, Point, Rect};
///
/// let mut tree: KdTree<f64> = KdTree::new();
///
/// tree.insert(Point::new(0.7, 0.2))?;
/// tree.insert(Point::new(0.5, 0.4))?;
/// tree.insert(Point::new(0.2, 0.3))?;
///
/// assert_eq!(tree.size(), 3);
/// assert!(tree.contains(&Point::new(0.5, 0.4))?);
///
/// let found = tree.range(&Rect::new(0.0, 0.0, 0.6, 0.5))?;
/// assert_eq!(found.len(), 2);
/// # Ok::<(), planekd::InvalidArgument>(())
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct KdTree<A, IDX = u32> {
    pub(crate) nodes: Vec<Node<A, IDX>>,
    pub(crate) root: IDX,
    pub(crate) size: usize,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Node<A, IDX> {
    pub(crate) point: Point<A>,
    pub(crate) lower: IDX,
    pub(crate) upper: IDX,
}

impl<A: Axis, IDX: Index> Node<A, IDX> {
    fn new(point: Point<A>) -> Self {
        Node {
            point,
            lower: <IDX as Index>::max(),
            upper: <IDX as Index>::max(),
        }
    }

    fn child(&self, branch: Branch) -> IDX {
        match branch {
            Branch::Lower => self.lower,
            Branch::Upper => self.upper,
        }
    }
}

/// Which child link of a node a routing step selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Branch {
    /// co-ordinate on the splitting axis strictly below the node's
    Lower,
    /// co-ordinate on the splitting axis at or above the node's
    Upper,
}

/// Outcome of the routing walk shared by `insert` and `contains`:
/// either the exact-match node, or the empty child slot the walked-for
/// point would occupy.
pub(crate) enum Locate<IDX> {
    Found(IDX),
    Vacancy(IDX, Branch),
}

impl<A, IDX> Default for KdTree<A, IDX>
where
    A: Axis,
    IDX: Index,
    usize: Cast<IDX>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A, IDX> KdTree<A, IDX>
where
    A: Axis,
    IDX: Index,
    usize: Cast<IDX>,
{
    /// Creates an empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planekd::{KdTree, Point};
    ///
    /// let mut tree: KdTree<f64> = KdTree::new();
    ///
    /// tree.insert(Point::new(0.1, 0.2))?;
    ///
    /// assert_eq!(tree.size(), 1);
    /// # Ok::<(), planekd::InvalidArgument>(())
    /// ```
    #[inline]
    pub fn new() -> Self {
        KdTree::with_capacity(16)
    }

    /// Creates an empty tree with node storage reserved for `capacity`
    /// points.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds what the index type `IDX` can
    /// address.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity <= <IDX as Index>::max().az::<usize>());
        KdTree {
            nodes: Vec::with_capacity(capacity),
            root: <IDX as Index>::max(),
            size: 0,
        }
    }

    /// Returns true iff no point has been inserted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of distinct points stored in the tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planekd::{KdTree, Point};
    ///
    /// let mut tree: KdTree<f64> = KdTree::new();
    ///
    /// tree.insert(Point::new(0.1, 0.2))?;
    /// tree.insert(Point::new(0.3, 0.4))?;
    /// tree.insert(Point::new(0.1, 0.2))?;
    ///
    /// assert_eq!(tree.size(), 2);
    /// # Ok::<(), planekd::InvalidArgument>(())
    /// ```
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Adds `point` to the tree. Inserting a point whose co-ordinates
    /// exactly match a stored point is a no-op, and the size is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument`] if either co-ordinate of `point` is NaN or
    /// infinite. Finite co-ordinates outside the unit square are
    /// accepted silently.
    pub fn insert(&mut self, point: Point<A>) -> Result<(), InvalidArgument> {
        check_point(&point)?;

        if self.root == <IDX as Index>::max() {
            self.root = self.push_node(point);
            self.size += 1;
            return Ok(());
        }

        match self.locate(&point) {
            Locate::Found(_) => {
                #[cfg(feature = "tracing")]
                event!(Level::TRACE, x = ?point.x, y = ?point.y, "duplicate insert ignored");
            }
            Locate::Vacancy(parent, branch) => {
                let idx = self.push_node(point);
                let parent_node = &mut self.nodes[parent.az::<usize>()];
                match branch {
                    Branch::Lower => parent_node.lower = idx,
                    Branch::Upper => parent_node.upper = idx,
                }
                self.size += 1;
                #[cfg(feature = "tracing")]
                event!(
                    Level::TRACE,
                    parent = parent.az::<usize>(),
                    ?branch,
                    "point attached"
                );
            }
        }

        Ok(())
    }

    /// Reports whether a point with exactly these co-ordinates is
    /// stored in the tree.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument`] if either co-ordinate of `point` is NaN or
    /// infinite.
    pub fn contains(&self, point: &Point<A>) -> Result<bool, InvalidArgument> {
        check_point(point)?;

        if self.root == <IDX as Index>::max() {
            return Ok(false);
        }

        Ok(matches!(self.locate(point), Locate::Found(_)))
    }

    fn push_node(&mut self, point: Point<A>) -> IDX {
        let idx: IDX = self.nodes.len().az::<IDX>();
        assert!(
            idx != <IDX as Index>::max(),
            "node storage exhausted for this index width"
        );
        self.nodes.push(Node::new(point));
        idx
    }

    /// Routing walk shared by `insert` and `contains`: descend from
    /// the root comparing one co-ordinate per level (x at even depths,
    /// y at odd), going lower on strictly-less and upper otherwise,
    /// until an exact match or an empty child slot is reached.
    ///
    /// Must not be called on an empty tree.
    fn locate(&self, point: &Point<A>) -> Locate<IDX> {
        let mut idx = self.root;
        let mut dim: usize = 0;

        loop {
            let node = &self.nodes[idx.az::<usize>()];

            if node.point == *point {
                return Locate::Found(idx);
            }

            let branch = if point.coord(dim) < node.point.coord(dim) {
                Branch::Lower
            } else {
                Branch::Upper
            };

            let child = node.child(branch);
            if child == <IDX as Index>::max() {
                return Locate::Vacancy(idx, branch);
            }

            idx = child;
            dim = (dim + 1).rem(K);
        }
    }
}

impl<A: Axis, IDX: Index> KdTree<A, IDX> {
    /// Returns a borrowed handle on the root node, or `None` for an
    /// empty tree.
    ///
    /// Handles expose a node's point and child handles and nothing
    /// else; they exist so external tooling (such as a partition-line
    /// renderer) can walk the structure without mutation access.
    pub fn root(&self) -> Option<NodeRef<'_, A, IDX>> {
        self.node_ref(self.root)
    }

    /// Iterates over every stored point, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Point<A>> + '_ {
        self.nodes.iter().map(|node| node.point)
    }

    fn node_ref(&self, idx: IDX) -> Option<NodeRef<'_, A, IDX>> {
        if idx == <IDX as Index>::max() {
            None
        } else {
            Some(NodeRef { tree: self, idx })
        }
    }
}

/// A read-only handle on one node of a [`KdTree`].
#[derive(Clone, Copy, Debug)]
pub struct NodeRef<'t, A, IDX> {
    tree: &'t KdTree<A, IDX>,
    idx: IDX,
}

impl<'t, A: Axis, IDX: Index> NodeRef<'t, A, IDX> {
    fn node(&self) -> &'t Node<A, IDX> {
        &self.tree.nodes[self.idx.az::<usize>()]
    }

    /// The point stored at this node.
    pub fn point(&self) -> Point<A> {
        self.node().point
    }

    /// The child whose subtree holds the points routed strictly below
    /// this node's co-ordinate on its splitting axis.
    pub fn lower(&self) -> Option<NodeRef<'t, A, IDX>> {
        self.tree.node_ref(self.node().lower)
    }

    /// The child whose subtree holds the points routed at or above
    /// this node's co-ordinate on its splitting axis.
    pub fn upper(&self) -> Option<NodeRef<'t, A, IDX>> {
        self.tree.node_ref(self.node().upper)
    }
}
