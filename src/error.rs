//! The error type shared by every public operation.

use thiserror::Error;

use crate::geom::{Axis, Point, Rect};

/// Error raised when a public operation receives an argument the
/// routing comparisons and pruning predicates are meaningless for: a
/// point or rectangle with a non-finite co-ordinate, or a rectangle
/// whose minimum exceeds its maximum on either axis.
///
/// This is the only error in the crate, and it is raised synchronously
/// by the operation that was handed the argument. No other validation
/// is performed; in particular, finite co-ordinates outside the unit
/// square are accepted silently.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("invalid argument: {0}")]
pub struct InvalidArgument(&'static str);

pub(crate) fn check_point<A: Axis>(point: &Point<A>) -> Result<(), InvalidArgument> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(InvalidArgument("point has a non-finite co-ordinate"))
    }
}

pub(crate) fn check_rect<A: Axis>(rect: &Rect<A>) -> Result<(), InvalidArgument> {
    if !(rect.xmin.is_finite()
        && rect.ymin.is_finite()
        && rect.xmax.is_finite()
        && rect.ymax.is_finite())
    {
        return Err(InvalidArgument("rectangle has a non-finite co-ordinate"));
    }
    if rect.xmin > rect.xmax || rect.ymin > rect.ymax {
        return Err(InvalidArgument("rectangle extent is inverted"));
    }
    Ok(())
}
