//! Planar value types: points and axis-aligned rectangles.

use num_traits::float::FloatCore;
use std::fmt::Debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis trait represents the traits that must be implemented
/// by the type that is used as the co-ordinate type, `A`, on
/// [`Point`], [`Rect`] and the tree itself. This will be [`f64`]
/// or [`f32`].
pub trait Axis: FloatCore + Default + Debug + Copy + Sync + Send {}
impl<T: FloatCore + Default + Debug + Copy + Sync + Send> Axis for T {}

/// A point in the plane.
///
/// Co-ordinates are by convention confined to the unit square, though
/// nothing enforces this. Equality is exact co-ordinate equality on
/// both axes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point<A> {
    /// horizontal co-ordinate
    pub x: A,
    /// vertical co-ordinate
    pub y: A,
}

impl<A: Axis> Point<A> {
    /// Creates a point from its co-ordinates.
    #[inline]
    pub fn new(x: A, y: A) -> Self {
        Point { x, y }
    }

    /// Returns the co-ordinate on the given axis (`0` = x, `1` = y).
    #[inline]
    pub fn coord(&self, axis: usize) -> A {
        if axis == 0 {
            self.x
        } else {
            self.y
        }
    }

    /// Returns true iff both co-ordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// An axis-aligned rectangle, closed on all four sides.
///
/// `xmin <= xmax` and `ymin <= ymax` are required wherever a `Rect` is
/// passed to a query; [`range`](crate::kdtree::KdTree::range) rejects
/// an inverted extent as an invalid argument.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect<A> {
    /// lower x bound
    pub xmin: A,
    /// lower y bound
    pub ymin: A,
    /// upper x bound
    pub xmax: A,
    /// upper y bound
    pub ymax: A,
}

impl<A: Axis> Rect<A> {
    /// Creates a rectangle from its boundary co-ordinates.
    #[inline]
    pub fn new(xmin: A, ymin: A, xmax: A, ymax: A) -> Self {
        Rect {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// The unit square `[0, 1] × [0, 1]`, the conventional domain of
    /// the points stored in the tree.
    #[inline]
    pub fn unit() -> Self {
        Rect::new(A::zero(), A::zero(), A::one(), A::one())
    }

    /// The whole plane.
    ///
    /// This is the bound the range query starts from at the root, so
    /// that finite points outside the unit square (which insertion
    /// accepts silently) are still enumerable.
    #[inline]
    pub fn everything() -> Self {
        Rect::new(
            A::neg_infinity(),
            A::neg_infinity(),
            A::infinity(),
            A::infinity(),
        )
    }

    /// Returns true iff `point` lies inside this rectangle, boundary
    /// included.
    #[inline]
    pub fn contains(&self, point: &Point<A>) -> bool {
        point.x >= self.xmin && point.x <= self.xmax && point.y >= self.ymin && point.y <= self.ymax
    }

    /// Returns true iff this rectangle and `other` share at least one
    /// point; touching boundaries count.
    #[inline]
    pub fn intersects(&self, other: &Rect<A>) -> bool {
        self.xmin <= other.xmax
            && self.xmax >= other.xmin
            && self.ymin <= other.ymax
            && self.ymax >= other.ymin
    }

    /// Cuts this rectangle at `at` on the given axis and returns the
    /// (lower, upper) halves. The cut line belongs to both halves.
    #[inline]
    pub fn split(&self, axis: usize, at: A) -> (Rect<A>, Rect<A>) {
        if axis == 0 {
            (
                Rect::new(self.xmin, self.ymin, at, self.ymax),
                Rect::new(at, self.ymin, self.xmax, self.ymax),
            )
        } else {
            (
                Rect::new(self.xmin, self.ymin, self.xmax, at),
                Rect::new(self.xmin, at, self.xmax, self.ymax),
            )
        }
    }
}
