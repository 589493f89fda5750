//! Spatial3d: analytic geometry calculations in three-dimensional space
//!
//! This crate provides vector algebra, direction descriptors, line and plane
//! representations, and the algorithms that classify and quantify the
//! relationships between them: angles, distances, intersections, coplanarity,
//! and reflection.
//!
//! Everything is a pure function over immutable value inputs. No call mutates
//! its arguments, holds state, or performs I/O, so concurrent use needs no
//! synchronization.
//!
//! ## Example
//!
//! ```rust
//! use spatial3d::{Point3, Vector3};
//! use spatial3d::relations::{distance_point_line, lines_relationship, LinesRelation};
//!
//! // Distance from (1, 0, 0) to the y-axis
//! let result = distance_point_line(
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 0.0, 0.0),
//!     Vector3::new(0.0, 1.0, 0.0),
//! ).unwrap();
//! assert!((result.distance - 1.0).abs() < 1e-12);
//!
//! // Two lines crossing in space
//! let rel = lines_relationship(
//!     Point3::new(1.0, 1.0, 0.0),
//!     Vector3::new(1.0, -1.0, 2.0),
//!     Point3::new(2.0, 0.0, 2.0),
//!     Vector3::new(-1.0, 1.0, 0.0),
//! ).unwrap();
//! assert_eq!(rel.relation, LinesRelation::Intersecting);
//! ```

use thiserror::Error;

pub mod algebra;
pub mod constants;
pub mod directions;
pub mod format;
pub mod lines;
pub mod planes;
pub mod reflections;
pub mod relations;
pub mod vectors;

// Re-export commonly used types
pub use directions::{DirectionCosines, DirectionRatios};
pub use lines::{LineEquation, LineForm};
pub use planes::{PlaneCoefficients, PlaneEquation, PlaneForm};
pub use vectors::{Point3, Vector3};

/// Main error type for the spatial3d library
///
/// Every failure is reported synchronously and no partial result is returned.
/// The computations themselves are deterministic, so there is nothing to
/// retry; callers are expected to validate inputs or report the error.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A geometrically meaningless input: a zero-length direction or normal
    /// vector, coincident points defining a line, collinear points defining
    /// a plane, or a degenerate division ratio.
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// A denominator within tolerance of zero that was not already rejected
    /// as a degenerate input. Unreachable given prior validation, kept as a
    /// guard on the linear solves.
    #[error("Numeric instability: {0}")]
    NumericInstability(String),
}

/// Result type for spatial3d operations
pub type Result<T> = std::result::Result<T, GeometryError>;
