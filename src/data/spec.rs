use ordered_float::NotNan;

use crate::Error;

/// Fewest vertices that still enclose an area.
pub const MIN_VERTICES: u32 = 3;
/// Indices are uploaded as unsigned shorts.
pub const MAX_VERTICES: u32 = u16::MAX as u32;
pub const DEFAULT_VERTICES: u32 = 5;
pub const DEFAULT_RADIUS: f64 = 0.7;

/// Vertex count and circumradius of a regular polygon, in clip-space units.
///
/// Both fields are validated on construction, so every `PolygonSpec` has
/// `MIN_VERTICES <= vertex_count <= MAX_VERTICES` and a finite, positive
/// radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PolygonSpec {
  vertex_count: u32,
  radius: NotNan<f64>,
}

impl PolygonSpec {
  pub fn new(vertex_count: u32, radius: f64) -> Result<PolygonSpec, Error> {
    if vertex_count < MIN_VERTICES {
      return Err(Error::InsufficientVertices);
    }
    if vertex_count > MAX_VERTICES {
      return Err(Error::TooManyVertices);
    }
    let radius = NotNan::new(radius).map_err(|_| Error::InvalidRadius)?;
    if !radius.is_finite() || *radius <= 0.0 {
      return Err(Error::InvalidRadius);
    }
    Ok(PolygonSpec {
      vertex_count,
      radius,
    })
  }

  pub fn vertex_count(&self) -> u32 {
    self.vertex_count
  }

  pub fn radius(&self) -> f64 {
    self.radius.into_inner()
  }

  /// Same vertex count, different radius.
  pub fn with_radius(self, radius: f64) -> Result<PolygonSpec, Error> {
    PolygonSpec::new(self.vertex_count, radius)
  }

  /// Same radius, different vertex count.
  pub fn with_vertex_count(self, vertex_count: u32) -> Result<PolygonSpec, Error> {
    PolygonSpec::new(vertex_count, self.radius())
  }

  /// Add one vertex. Saturates at `MAX_VERTICES`.
  pub fn increment(&mut self) {
    self.vertex_count = (self.vertex_count + 1).min(MAX_VERTICES);
  }

  /// Remove one vertex. Never drops below `MIN_VERTICES`.
  pub fn decrement(&mut self) {
    self.vertex_count = self.vertex_count.saturating_sub(1).max(MIN_VERTICES);
  }
}

impl Default for PolygonSpec {
  fn default() -> Self {
    PolygonSpec {
      vertex_count: DEFAULT_VERTICES,
      radius: NotNan::new(DEFAULT_RADIUS).unwrap_or_default(),
    }
  }
}
