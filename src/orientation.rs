use num_traits::Float;
use std::cmp::Ordering;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// Uses the adaptive-precision `orient2d` predicate, so the answer is exact
  /// for any finite input.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use polyfan::Orientation;
  /// let p1 = [0.0, 0.0];
  /// let p2 = [0.0, 1.0];
  /// assert!(Orientation::new(&p1, &p2, &[0.0, 2.0]).is_colinear());
  /// assert!(Orientation::new(&p1, &p2, &[-1.0, 2.0]).is_ccw());
  /// assert!(Orientation::new(&p1, &p2, &[1.0, 2.0]).is_cw());
  /// ```
  pub fn new<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: Float,
  {
    let widen = |v: T| v.to_f64().unwrap_or(f64::NAN);
    let orient = geometry_predicates::predicates::orient2d(
      [widen(p1[0]), widen(p1[1])],
      [widen(p2[0]), widen(p2[1])],
      [widen(p3[0]), widen(p3[1])],
    );
    match orient.partial_cmp(&0.0) {
      Some(Ordering::Greater) => CounterClockWise,
      Some(Ordering::Less) => ClockWise,
      _ => CoLinear,
    }
  }

  pub fn is_ccw(self) -> bool {
    self == CounterClockWise
  }

  pub fn is_colinear(self) -> bool {
    self == CoLinear
  }

  pub fn is_cw(self) -> bool {
    self == ClockWise
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      CounterClockWise => ClockWise,
      ClockWise => CounterClockWise,
      CoLinear => CoLinear,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn unit_square_corners() {
    let a = [0.0_f32, 0.0];
    let b = [1.0_f32, 0.0];
    let c = [1.0_f32, 1.0];
    assert_eq!(Orientation::new(&a, &b, &c), CounterClockWise);
    assert_eq!(Orientation::new(&c, &b, &a), ClockWise);
  }

  #[proptest]
  fn swap_reverses(
    #[strategy(-100.0..100.0f64)] x1: f64,
    #[strategy(-100.0..100.0f64)] y1: f64,
    #[strategy(-100.0..100.0f64)] x2: f64,
    #[strategy(-100.0..100.0f64)] y2: f64,
    #[strategy(-100.0..100.0f64)] x3: f64,
    #[strategy(-100.0..100.0f64)] y3: f64,
  ) {
    let (p, q, r) = ([x1, y1], [x2, y2], [x3, y3]);
    prop_assert_eq!(
      Orientation::new(&p, &q, &r),
      Orientation::new(&q, &p, &r).reverse()
    );
  }
}
