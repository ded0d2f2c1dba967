#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod error;
pub use error::PathError;

/// Densification of sparse waypoint polylines.
pub mod interpolate;

/// I/O utilities for reading and writing point series.
pub mod io;

/// Ground look points for oblique cameras flying along a path.
pub mod look;

/// Tangent, sideways normal and curvature estimation on discrete paths.
pub mod normals;

/// Vector utilities operating on single vectors and batches.
pub mod vector;
