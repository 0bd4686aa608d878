use std::fmt;
use std::str::FromStr;

use crate::data::PolygonSpec;
use crate::Error;

/// Buttons that change the vertex count. Parsed from the value of a toggle
/// attribute: `"up"` or `"down"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
  Up,
  Down,
}

impl Toggle {
  /// Apply the toggle to `spec`. Returns whether the vertex count changed.
  pub fn apply(self, spec: &mut PolygonSpec) -> bool {
    let before = spec.vertex_count();
    match self {
      Toggle::Up => spec.increment(),
      Toggle::Down => spec.decrement(),
    }
    spec.vertex_count() != before
  }
}

impl FromStr for Toggle {
  type Err = Error;

  fn from_str(value: &str) -> Result<Toggle, Error> {
    match value.trim() {
      "up" => Ok(Toggle::Up),
      "down" => Ok(Toggle::Down),
      _ => Err(Error::UnknownToggle),
    }
  }
}

impl fmt::Display for Toggle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Toggle::Up => write!(f, "up"),
      Toggle::Down => write!(f, "down"),
    }
  }
}

/// Side of the largest square that fits a `width` x `height` window.
pub fn square_size(width: f64, height: f64) -> u32 {
  let side = width.min(height);
  if side.is_finite() && side > 0.0 {
    side.min(f64::from(u32::MAX)) as u32
  } else {
    0
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn parse() {
    assert_eq!("up".parse::<Toggle>(), Ok(Toggle::Up));
    assert_eq!(" down ".parse::<Toggle>(), Ok(Toggle::Down));
    assert_eq!("sideways".parse::<Toggle>(), Err(Error::UnknownToggle));
    assert_eq!("".parse::<Toggle>(), Err(Error::UnknownToggle));
  }

  #[test]
  fn display_roundtrip() {
    for toggle in [Toggle::Up, Toggle::Down] {
      assert_eq!(toggle.to_string().parse::<Toggle>(), Ok(toggle));
    }
  }

  #[test]
  fn down_at_floor_is_noop() {
    let mut spec = PolygonSpec::new(3, 1.0).unwrap();
    assert!(!Toggle::Down.apply(&mut spec));
    assert_eq!(spec.vertex_count(), 3);
  }

  #[test]
  fn up_changes() {
    let mut spec = PolygonSpec::new(5, 1.0).unwrap();
    assert!(Toggle::Up.apply(&mut spec));
    assert_eq!(spec.vertex_count(), 6);
  }

  #[test]
  fn square() {
    assert_eq!(square_size(1024.0, 768.0), 768);
    assert_eq!(square_size(300.5, 900.0), 300);
    assert_eq!(square_size(0.0, 900.0), 0);
    assert_eq!(square_size(f64::NAN, 900.0), 900);
    assert_eq!(square_size(-10.0, 900.0), 0);
  }

  #[proptest]
  fn toggles_keep_spec_valid(#[strategy(any_spec())] spec: PolygonSpec, ups: Vec<bool>) {
    let mut spec = spec;
    for up in ups {
      let toggle = if up { Toggle::Up } else { Toggle::Down };
      toggle.apply(&mut spec);
      prop_assert!(PolygonSpec::new(spec.vertex_count(), spec.radius()).is_ok());
    }
  }
}
