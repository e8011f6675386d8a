//! Index types used to address nodes within the tree's backing storage.

use az::Cast;
use num_traits::{PrimInt, Unsigned, Zero};

/// Trait implemented by the unsigned integer types that can be used to
/// index nodes within the tree's backing storage, selected via the
/// `IDX` generic parameter on [`KdTree`](crate::kdtree::KdTree).
///
/// The type's maximum value is reserved as the sentinel marking an
/// absent child link (and the root slot of an empty tree), so a tree
/// addressed by `IDX` can hold up to `IDX::MAX` nodes. Use `u16` to
/// shrink nodes when storing fewer than 65,535 points, `usize` when
/// the point count may exceed `u32::MAX`.
pub trait Index: PrimInt + Unsigned + Zero + Cast<usize> {
    /// the reserved value marking an absent child link
    fn max() -> Self;
}

impl Index for u16 {
    fn max() -> u16 {
        u16::MAX
    }
}

impl Index for u32 {
    fn max() -> u32 {
        u32::MAX
    }
}

impl Index for usize {
    fn max() -> usize {
        usize::MAX
    }
}
