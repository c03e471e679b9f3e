//! # voroplane
//!
//! `voroplane` is a Rust library for 2D Voronoi tessellations inside a
//! rectangular boundary. It builds the diagram with a Fortune sweep line,
//! clips every bisector to the bounding box and hands back both the edge
//! set and the closed cell polygon of every site.
//!
//! ## Features
//!
//! - **Deterministic sweep**: identical input always yields identical output,
//!   including tie-breaks for cocircular and cohorizontal sites.
//! - **Closed cells**: with [`BorderMode::ClosedBorders`] the box perimeter
//!   is partitioned among the sites so every cell is a closed polygon with
//!   an area and a centroid.
//! - **Lloyd relaxation**: [`Tessellation::relax`] moves each site to its
//!   cell centroid for iterative point-set smoothing.
//!
//! ## Main Interface
//!
//! The primary entry point is the [`Tessellation`] struct, or the
//! [`tessellate`] convenience function for one-shot use.

mod beachline;
mod bounds;
mod builder;
mod cell;
mod clip;
mod error;
mod event;
mod geometry;
mod tessellation;

pub use bounds::BoundingBox;
pub use bounds::BOX_ID_BOTTOM;
pub use bounds::BOX_ID_LEFT;
pub use bounds::BOX_ID_RIGHT;
pub use bounds::BOX_ID_TOP;
pub use cell::Cell;
pub use clip::BorderMode;
pub use clip::Edge;
pub use error::VoronoiError;
pub use geometry::approx_eq;
pub use geometry::circumcenter;
pub use geometry::orient;
pub use geometry::segment_intersection;
pub use geometry::Point;
pub use geometry::EPSILON;
pub use tessellation::tessellate;
pub use tessellation::Tessellation;
