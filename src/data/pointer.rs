/// Pointer position normalized to the window: `(0, 0)` is the top-left
/// corner, `(1, 1)` the bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Pointer {
  pub x: f32,
  pub y: f32,
}

impl Pointer {
  /// Normalize client coordinates against the window extent. Components are
  /// clamped to `[0, 1]` and a zero extent maps to 0.
  pub fn from_client(client_x: f64, client_y: f64, width: f64, height: f64) -> Pointer {
    Pointer {
      x: normalize(client_x, width),
      y: normalize(client_y, height),
    }
  }

  pub fn as_array(&self) -> [f32; 2] {
    [self.x, self.y]
  }
}

fn normalize(value: f64, extent: f64) -> f32 {
  if extent > 0.0 && value.is_finite() {
    (value / extent).clamp(0.0, 1.0) as f32
  } else {
    0.0
  }
}
