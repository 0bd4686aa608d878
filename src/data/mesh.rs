use claims::debug_assert_ok;
use std::iter::FusedIterator;

use super::{Color, Point};
use crate::{Error, Orientation};

/// Indexed triangle list ready for upload.
///
/// `positions` and `colors` are index-aligned, and `indices` holds triangles
/// as consecutive triples referencing both, one triangle per vertex.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
  pub positions: Vec<Point<f32, 3>>,
  pub colors: Vec<Color>,
  pub indices: Vec<u16>,
}

impl Mesh {
  pub fn new(positions: Vec<Point<f32, 3>>, colors: Vec<Color>, indices: Vec<u16>) -> Result<Mesh, Error> {
    let mesh = Mesh {
      positions,
      colors,
      indices,
    };
    mesh.validate()?;
    Ok(mesh)
  }

  pub fn new_unchecked(positions: Vec<Point<f32, 3>>, colors: Vec<Color>, indices: Vec<u16>) -> Mesh {
    let mesh = Mesh {
      positions,
      colors,
      indices,
    };
    debug_assert_ok!(mesh.validate());
    mesh
  }

  /// Checks that every vertex has a color, that there are three indices per
  /// vertex, and that every index names a vertex.
  ///
  /// $O(n)$
  pub fn validate(&self) -> Result<(), Error> {
    let len = self.positions.len();
    if self.colors.len() != len || self.indices.len() != 3 * len {
      return Err(Error::MeshLengthMismatch);
    }
    if self.indices.iter().any(|&idx| usize::from(idx) >= len) {
      return Err(Error::IndexOutOfBounds);
    }
    Ok(())
  }

  pub fn vertex_count(&self) -> usize {
    self.positions.len()
  }

  /// Positions as packed `x, y, z` floats.
  pub fn flat_positions(&self) -> Vec<f32> {
    self.positions.iter().flat_map(|pt| pt.array).collect()
  }

  /// Colors as packed `r, g, b, a` floats.
  pub fn flat_colors(&self) -> Vec<f32> {
    self.colors.iter().flat_map(|color| color.0).collect()
  }

  pub fn triangles(&self) -> Triangles<'_> {
    Triangles {
      chunks: self.indices.chunks_exact(3),
    }
  }

  /// Winding of a triangle as seen from +z. Triangles with a repeated index,
  /// three colinear corners, or a corner outside `positions` are `CoLinear`.
  pub fn orientation(&self, [a, b, c]: [u16; 3]) -> Orientation {
    let pt = |idx: u16| self.positions.get(usize::from(idx)).map(Point::xy);
    match (pt(a), pt(b), pt(c)) {
      (Some(a), Some(b), Some(c)) => a.orientation(&b, &c),
      _ => Orientation::CoLinear,
    }
  }

  /// Triangles that cover a non-zero area.
  pub fn solid_triangles(&self) -> impl Iterator<Item = [u16; 3]> + '_ {
    self
      .triangles()
      .filter(move |&tri| !self.orientation(tri).is_colinear())
  }
}

pub struct Triangles<'a> {
  chunks: std::slice::ChunksExact<'a, u16>,
}

impl<'a> Iterator for Triangles<'a> {
  type Item = [u16; 3];

  fn next(&mut self) -> Option<Self::Item> {
    self.chunks.next().map(|tri| [tri[0], tri[1], tri[2]])
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.chunks.size_hint()
  }
}

impl<'a> ExactSizeIterator for Triangles<'a> {}
impl<'a> FusedIterator for Triangles<'a> {}
