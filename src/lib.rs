#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![doc(html_root_url = "https://docs.rs/planekd/0.3.1")]

//! # planekd
//!
//! A 2D k-d tree for points in the unit square, answering exact
//! membership, axis-aligned rectangle range enumeration, and
//! nearest-neighbour queries. Range and nearest-neighbour lookups
//! prune whole regions of the plane using the rectangle each subtree
//! is confined to by construction, so they beat a linear scan on all
//! but tiny point sets.
//!
//! A brute-force twin of the tree, [`PointSet`], answers the same
//! queries by scanning an unordered `Vec`; it serves as the
//! correctness baseline in this crate's tests and as a sanity fallback
//! for callers who want one.
//!
//! ## Usage
//!
//! Add `planekd` to `Cargo.toml`
//! ```toml
//! [dependencies]
//! planekd = "0.3"
//! ```
//!
//! ```rust
//! use planekd::{KdTree, Point, Rect, SquaredEuclidean};
//!
//! let mut tree: KdTree<f64> = KdTree::new();
//!
//! for (x, y) in [(0.7, 0.2), (0.5, 0.4), (0.2, 0.3), (0.4, 0.7), (0.9, 0.6)] {
//!     tree.insert(Point::new(x, y))?;
//! }
//!
//! assert_eq!(tree.size(), 5);
//! assert!(tree.contains(&Point::new(0.5, 0.4))?);
//! assert!(!tree.contains(&Point::new(0.5, 0.1))?);
//!
//! // no stored point falls in this band
//! let band = tree.range(&Rect::new(0.28, 0.78, 0.72, 0.9))?;
//! assert!(band.is_empty());
//!
//! let nearest = tree.nearest_one::<SquaredEuclidean>(&Point::new(0.2, 0.17))?.unwrap();
//! assert_eq!(nearest.point, Point::new(0.2, 0.3));
//! # Ok::<(), planekd::InvalidArgument>(())
//! ```
//!
//! ## Co-ordinate and index types
//!
//! The co-ordinate type is generic over [`f64`] and [`f32`] via the
//! [`Axis`] trait. Node storage is a flat arena addressed by an
//! unsigned index type chosen via the tree's second type parameter
//! (`u32` by default); see [`types::Index`].
//!
//! ## Cargo features
//!
//! - `tracing` (default): emits [`tracing`](https://docs.rs/tracing)
//!   events from the mutation path of the tree.
//! - `serde`: derives `Serialize`/`Deserialize` on [`Point`],
//!   [`Rect`], [`KdTree`] and [`PointSet`].

pub mod distance;
pub mod distance_metric;
pub mod error;
pub mod geom;
pub mod kdtree;
pub mod nearest_neighbour;
pub mod point_set;
#[doc(hidden)]
pub mod query;
pub mod types;

pub use crate::distance::SquaredEuclidean;
pub use crate::distance_metric::DistanceMetric;
pub use crate::error::InvalidArgument;
pub use crate::geom::{Axis, Point, Rect};
pub use crate::kdtree::{KdTree, NodeRef};
pub use crate::nearest_neighbour::NearestNeighbour;
pub use crate::point_set::PointSet;
