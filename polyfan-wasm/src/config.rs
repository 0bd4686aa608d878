use polyfan::data::PolygonSpec;

pub const DEFAULT_CANVAS_ID: &str = "webgl-canvas";
pub const DEFAULT_TOGGLE_ATTRIBUTE: &str = "data-toggle";

/// Canvas attribute overriding the initial vertex count.
pub const VERTICES_ATTRIBUTE: &str = "data-vertices";
/// Canvas attribute overriding the polygon radius.
pub const RADIUS_ATTRIBUTE: &str = "data-radius";

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
  pub canvas_id: String,
  /// Clickable elements carrying this attribute with value `up` or `down`
  /// change the vertex count.
  pub toggle_attribute: String,
  pub spec: PolygonSpec,
}

impl Default for DemoConfig {
  fn default() -> Self {
    DemoConfig {
      canvas_id: DEFAULT_CANVAS_ID.to_string(),
      toggle_attribute: DEFAULT_TOGGLE_ATTRIBUTE.to_string(),
      spec: PolygonSpec::default(),
    }
  }
}

impl DemoConfig {
  /// CSS selector matching every toggle element.
  pub fn toggle_selector(&self) -> String {
    format!("[{}]", self.toggle_attribute)
  }

  /// Apply overrides read from the canvas element. Values that fail to parse
  /// or describe an invalid polygon are skipped; one message per rejected
  /// value is returned.
  pub fn apply_overrides(&mut self, vertices: Option<&str>, radius: Option<&str>) -> Vec<String> {
    let mut rejected = Vec::new();
    if let Some(value) = vertices {
      match value.trim().parse::<u32>() {
        Ok(count) => match self.spec.with_vertex_count(count) {
          Ok(spec) => self.spec = spec,
          Err(err) => rejected.push(format!("{}={:?}: {}", VERTICES_ATTRIBUTE, value, err)),
        },
        Err(err) => rejected.push(format!("{}={:?}: {}", VERTICES_ATTRIBUTE, value, err)),
      }
    }
    if let Some(value) = radius {
      match value.trim().parse::<f64>() {
        Ok(radius) => match self.spec.with_radius(radius) {
          Ok(spec) => self.spec = spec,
          Err(err) => rejected.push(format!("{}={:?}: {}", RADIUS_ATTRIBUTE, value, err)),
        },
        Err(err) => rejected.push(format!("{}={:?}: {}", RADIUS_ATTRIBUTE, value, err)),
      }
    }
    rejected
  }
}
