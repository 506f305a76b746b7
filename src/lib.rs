//! Point-in-polygon queries via Kirkpatrick hierarchical triangulation.
//!
//! Preprocess a fixed simple polygon once with [`build`], then answer
//! queries in `O(log n)` time against the resulting [`Locator`]:
//!
//! ```rust
//! use kirkpatrick::{build, Point};
//!
//! let square: Vec<Point> = [(0, 0), (100, 0), (100, 100), (0, 100)]
//!   .into_iter()
//!   .map(Point::from)
//!   .collect();
//! let locator = build(&square);
//! assert!(locator.query(Point::new(50, 50)));
//! assert!(!locator.query(Point::new(150, 50)));
//! ```
//!
//! The crate has four layers, leaves first: a geometry kernel
//! ([`orientation`]) of integer orientation predicates, a planar
//! [`data::Graph`] supporting independent-set extraction, triangulation
//! primitives ([`algorithms::triangulation`]), and the hierarchical
//! locator itself ([`algorithms::locator`]) that drives the refinement
//! loop and the DAG query.
//!
//! Out of scope: polygon entry, on-screen rendering, and persistence of
//! point lists are the job of a separate, interactive front end that
//! consumes this crate only through `build` and `Locator::query`.

pub mod algorithms;
pub mod data;
pub mod orientation;
pub mod point;

pub use algorithms::{build, try_build, Locator};
pub use orientation::Orientation;
pub use point::Point;

/// Errors this crate can detect and report explicitly.
///
/// Everything else the distilled contract calls out as "benign" (an empty
/// independent set, a missing vertex passed to `remove`, an already-purged
/// triangle still referenced transiently during refinement) is absorbed
/// silently rather than modeled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Fewer than three vertices were supplied.
  InsufficientVertices,
  /// Two input vertices coincide.
  DuplicatePoints,
  /// An edge was added between a point and a vertex that is not (yet)
  /// in the graph. Indicates a logic error in the build pipeline itself,
  /// not malformed caller input.
  MalformedEdge,
  /// A triangle emitted by the triangulation primitives turned out to be
  /// clockwise or degenerate; indicates a logic error in the build
  /// pipeline.
  ClockWiseViolation,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Error::InsufficientVertices => write!(f, "polygon must have at least 3 vertices"),
      Error::DuplicatePoints => write!(f, "polygon has duplicate vertices"),
      Error::MalformedEdge => write!(f, "edge endpoint is not a vertex of the graph"),
      Error::ClockWiseViolation => write!(f, "triangle is not counter-clockwise"),
    }
  }
}

impl std::error::Error for Error {}
