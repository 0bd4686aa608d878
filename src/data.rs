mod color;
mod mesh;
pub(crate) mod point;
mod pointer;
mod spec;

pub use color::Color;
pub use mesh::{Mesh, Triangles};
pub use point::Point;
pub use pointer::Pointer;
pub use spec::{PolygonSpec, DEFAULT_RADIUS, DEFAULT_VERTICES, MAX_VERTICES, MIN_VERTICES};
