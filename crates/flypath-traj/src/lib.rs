#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod error;
pub use error::TrajectoryError;

/// Camera placement types and the spherical camera convention.
pub mod camera;

/// Interface to the external rendering engine.
pub mod engine;

/// Output file naming and the frame counter.
pub mod naming;

/// Frame by frame rendering of camera trajectories.
pub mod render;

/// Spiral, drift and re-gaze camera motion patterns.
pub mod trajectory;
