//! The per-frame sequence: rebuild, upload, size, clear, set the pointer
//! uniform, draw.

use crate::algorithms::fan::fan_mesh;
use crate::data::{Color, Mesh, Pointer, PolygonSpec};
use crate::input::{square_size, Toggle};

/// Everything a frame depends on. Mutated by input handlers between frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderState {
  pub spec: PolygonSpec,
  pub pointer: Pointer,
  /// Side of the square canvas, in pixels.
  pub canvas_size: u32,
}

impl RenderState {
  pub fn new(spec: PolygonSpec) -> RenderState {
    RenderState {
      spec,
      ..RenderState::default()
    }
  }

  /// The window changed size. Returns the new canvas side.
  pub fn resize(&mut self, width: f64, height: f64) -> u32 {
    self.canvas_size = square_size(width, height);
    self.canvas_size
  }

  pub fn pointer_moved(&mut self, client_x: f64, client_y: f64, width: f64, height: f64) {
    self.pointer = Pointer::from_client(client_x, client_y, width, height);
  }

  /// Returns whether the vertex count changed.
  pub fn toggle(&mut self, toggle: Toggle) -> bool {
    toggle.apply(&mut self.spec)
  }
}

/// A drawing target that accepts one indexed triangle mesh per frame.
pub trait Surface {
  /// Replace the contents of the position, color and index buffers.
  fn upload(&mut self, mesh: &Mesh);
  /// Square viewport anchored at the origin.
  fn viewport(&mut self, size: u32);
  fn clear(&mut self, color: Color);
  fn set_pointer(&mut self, pointer: Pointer);
  /// Draw `count` indices from the index buffer as triangles.
  fn draw_indexed(&mut self, count: usize);
}

/// Render one frame of `state` onto `surface`. Geometry is rebuilt from
/// scratch every time.
pub fn render_frame<S: Surface + ?Sized>(state: &RenderState, surface: &mut S) {
  let mesh = fan_mesh(&state.spec);
  surface.upload(&mesh);
  surface.viewport(state.canvas_size);
  surface.clear(Color::TRANSPARENT);
  surface.set_pointer(state.pointer);
  surface.draw_indexed(mesh.indices.len());
}
