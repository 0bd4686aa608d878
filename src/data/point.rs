use array_init::array_init;
use num_traits::*;
use std::ops::Index;

use crate::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)] // Required for correctness!
pub struct Point<T, const N: usize> {
  pub array: [T; N],
}

// Methods on N-dimensional points.
impl<T, const N: usize> Point<T, N> {
  pub const fn new(array: [T; N]) -> Point<T, N> {
    Point { array }
  }

  // Similar to num_traits::identities::Zero but doesn't require an Add impl.
  pub fn zero() -> Self
  where
    T: Zero,
  {
    Point {
      array: array_init(|_| Zero::zero()),
    }
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U, N>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T, 2> {
  fn from(point: (T, T)) -> Point<T, 2> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<(T, T, T)> for Point<T, 3> {
  fn from(point: (T, T, T)) -> Point<T, 3> {
    Point {
      array: [point.0, point.1, point.2],
    }
  }
}

// Methods on three-dimensional points.
impl<T: Clone> Point<T, 3> {
  /// Drop the z coordinate.
  pub fn xy(&self) -> Point<T, 2> {
    Point {
      array: [self.array[0].clone(), self.array[1].clone()],
    }
  }
}

// Methods on two-dimensional points.
impl<T: Float> Point<T, 2> {
  pub fn orientation(&self, q: &Point<T, 2>, r: &Point<T, 2>) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  /// Point on the circle of `radius` around the origin, `angle` radians
  /// clockwise from the positive y axis.
  pub fn on_circle(angle: T, radius: T) -> Point<T, 2> {
    Point::new([angle.sin() * radius, angle.cos() * radius])
  }
}

#[cfg(test)]
pub mod tests {
  use super::*;
  use std::f64::consts::PI;

  #[test]
  fn on_circle_starts_at_top() {
    let pt = Point::on_circle(0.0_f64, 2.0);
    assert_eq!(pt, Point::new([0.0, 2.0]));
  }

  #[test]
  fn on_circle_turns_clockwise() {
    let a = Point::on_circle(0.0_f64, 1.0);
    let b = Point::on_circle(PI / 2.0, 1.0);
    assert!((b.x_coord() - 1.0).abs() < 1e-12);
    assert!(b.y_coord().abs() < 1e-12);
    assert!(Point::new([0.0, 0.0]).orientation(&a, &b).is_cw());
  }

  #[test]
  fn cast_narrows() {
    let pt: Point<f64, 3> = (0.5, 0.25, 0.0).into();
    let narrow: Point<f32, 3> = pt.cast(|v| v as f32);
    assert_eq!(narrow.array, [0.5_f32, 0.25, 0.0]);
    assert_eq!(narrow.xy(), Point::new([0.5_f32, 0.25]));
  }
}
