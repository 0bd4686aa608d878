/// Straight (non-premultiplied) RGBA, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Color(pub [f32; 4]);

impl Color {
  pub const TRANSPARENT: Color = Color([0.0, 0.0, 0.0, 0.0]);

  pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Color {
    Color([r, g, b, a])
  }

  pub fn r(&self) -> f32 {
    self.0[0]
  }

  pub fn g(&self) -> f32 {
    self.0[1]
  }

  pub fn b(&self) -> f32 {
    self.0[2]
  }

  pub fn a(&self) -> f32 {
    self.0[3]
  }
}

impl From<[f32; 4]> for Color {
  fn from(array: [f32; 4]) -> Color {
    Color(array)
  }
}
