// Strategies for:
//  * polygon specs
//  * pointers
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Pointer, PolygonSpec, MIN_VERTICES};

use proptest::prelude::*;

/// Upper bound for generated vertex counts. Large enough to exercise the
/// wrap-around of fan indices, small enough to keep tests fast.
pub const MAX_TEST_VERTICES: u32 = 200;

pub fn any_spec() -> impl Strategy<Value = PolygonSpec> {
  (MIN_VERTICES..=MAX_TEST_VERTICES, 0.01..10.0f64).prop_filter_map(
    "valid polygon spec",
    |(vertex_count, radius)| PolygonSpec::new(vertex_count, radius).ok(),
  )
}

pub fn any_pointer() -> impl Strategy<Value = Pointer> {
  (0.0..=1.0f32, 0.0..=1.0f32).prop_map(|(x, y)| Pointer { x, y })
}
