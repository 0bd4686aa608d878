use std::f64::consts::PI;

use crate::data::{Color, Mesh, Point, PolygonSpec};

// Fan tessellation of a regular N-gon.
//
// Vertex i sits at angle i * (360 / N) degrees, measured clockwise from the
// positive y axis. There is no dedicated center vertex: index 0 is both the
// first perimeter vertex and the pivot of the fan. Triangle k is
//   (k+1, k+2, 0)  if k is even
//   (0, k+1, k+2)  if k is odd
// with every index taken modulo N. Triangles 0..N-2 cover the polygon as the
// fan (0, j, j+1); the final two collapse onto vertex 0 and draw nothing.

/// Alpha of every vertex color.
pub const VERTEX_ALPHA: f32 = 0.7;

/// $O(n)$ Positions, colors and fan indices for `spec`.
///
/// ```rust
/// # use polyfan::data::PolygonSpec;
/// # use polyfan::algorithms::fan::fan_mesh;
/// let mesh = fan_mesh(&PolygonSpec::new(4, 1.0)?);
/// assert_eq!(mesh.indices, vec![1, 2, 0, 0, 2, 3, 3, 0, 0, 0, 0, 1]);
/// # Ok::<(), polyfan::Error>(())
/// ```
pub fn fan_mesh(spec: &PolygonSpec) -> Mesh {
  let n = spec.vertex_count();
  let radius = spec.radius();
  let step = 360.0 / f64::from(n);

  let mut positions = Vec::with_capacity(n as usize);
  let mut colors = Vec::with_capacity(n as usize);
  let mut indices = Vec::with_capacity(3 * n as usize);
  for i in 0..n {
    let angle = f64::from(i) * step * (PI / 180.0);
    let [x, y] = Point::on_circle(angle, radius).array;
    positions.push(Point::new([x, y, 0.0]).cast(|v| v as f32));
    colors.push(vertex_color(angle));
    indices.extend_from_slice(&fan_triangle(i, n));
  }
  Mesh::new_unchecked(positions, colors, indices)
}

/// Color of the vertex at `angle` radians. Sampled from the unit circle, so it
/// does not depend on the polygon's radius.
///
/// Red follows the height of the vertex. Vertices on the right half are
/// tinted green, the rest blue, each in proportion to their distance from the
/// vertical axis.
pub fn vertex_color(angle: f64) -> Color {
  let px = angle.sin();
  let py = angle.cos();
  let red = ((py + 1.0) * 0.4) as f32;
  if px > 0.0 {
    Color::new(red, px as f32, 0.0, VERTEX_ALPHA)
  } else {
    Color::new(red, 0.0, px.abs() as f32, VERTEX_ALPHA)
  }
}

/// Triangle `k` of the fan over `n` vertices. Indices wrap modulo `n` for
/// every `k`, while the winding follows the parity of `k` itself.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn fan_triangle(k: u32, n: u32) -> [u16; 3] {
  let base = u64::from(k % n);
  let wrap = |step: u64| ((base + step) % u64::from(n)) as u16;
  if k % 2 == 0 {
    [wrap(1), wrap(2), 0]
  } else {
    [0, wrap(1), wrap(2)]
  }
}
