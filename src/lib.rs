#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Triangle-fan tessellation of regular polygons, plus the per-frame render
//! sequence that uploads and draws them.
//!
//! ```rust
//! # use polyfan::data::PolygonSpec;
//! # use polyfan::algorithms::fan::fan_mesh;
//! let spec = PolygonSpec::new(5, 0.7)?;
//! let mesh = fan_mesh(&spec);
//! assert_eq!(mesh.positions.len(), 5);
//! assert_eq!(mesh.indices.len(), 15);
//! # Ok::<(), polyfan::Error>(())
//! ```

pub mod algorithms;
pub mod data;
pub mod input;
mod orientation;
pub mod render;

pub use orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  TooManyVertices,
  /// Radius is NaN, infinite, zero or negative.
  InvalidRadius,
  UnknownToggle,
  MeshLengthMismatch,
  IndexOutOfBounds,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::TooManyVertices => write!(
        f,
        "Too many vertices, indices must fit in 16 bits"
      ),
      Error::InvalidRadius => write!(f, "Radius must be finite and positive"),
      Error::UnknownToggle => write!(f, "Unknown toggle, expected \"up\" or \"down\""),
      Error::MeshLengthMismatch => write!(f, "Mesh buffer lengths disagree"),
      Error::IndexOutOfBounds => write!(f, "Mesh index out of bounds"),
    }
  }
}

impl std::error::Error for Error {}

#[cfg(test)]
pub mod testing;
