mod fan {
  use polyfan::algorithms::fan::*;
  use polyfan::data::*;
  use polyfan::input::Toggle;
  use polyfan::render::*;
  use polyfan::*;

  #[test]
  fn triangle() -> Result<(), Error> {
    let mesh = fan_mesh(&PolygonSpec::new(3, 1.0)?);
    mesh.validate()?;
    assert_eq!(mesh.indices, vec![1, 2, 0, 0, 2, 0, 0, 1, 0]);
    assert_eq!(mesh.solid_triangles().count(), 1);
    Ok(())
  }

  #[test]
  fn pentagon_uses_both_windings() -> Result<(), Error> {
    let mesh = fan_mesh(&PolygonSpec::new(5, 0.7)?);
    let tris: Vec<[u16; 3]> = mesh.triangles().collect();
    // Even steps put the pivot last, odd steps put it first.
    assert!(tris.iter().step_by(2).all(|tri| tri[2] == 0));
    assert!(tris.iter().skip(1).step_by(2).all(|tri| tri[0] == 0));
    assert_eq!(tris[0], [1, 2, 0]);
    assert_eq!(tris[1], [0, 2, 3]);
    Ok(())
  }

  #[test]
  fn flat_buffers_match_counts() -> Result<(), Error> {
    let mesh = fan_mesh(&PolygonSpec::new(8, 0.5)?);
    assert_eq!(mesh.flat_positions().len(), 8 * 3);
    assert_eq!(mesh.flat_colors().len(), 8 * 4);
    Ok(())
  }

  #[test]
  fn toggles_drive_vertex_count() -> Result<(), Error> {
    let mut state = RenderState::new(PolygonSpec::default());
    for value in ["down", "down", "down", "down", "up"] {
      state.toggle(value.parse::<Toggle>()?);
    }
    assert_eq!(state.spec.vertex_count(), 4);
    assert_eq!(fan_mesh(&state.spec).vertex_count(), 4);
    Ok(())
  }

  #[test]
  fn largest_polygon_fits_u16() -> Result<(), Error> {
    let mesh = fan_mesh(&PolygonSpec::new(MAX_VERTICES, 1.0)?);
    mesh.validate()?;
    assert_eq!(mesh.indices.len(), 3 * MAX_VERTICES as usize);
    assert_eq!(mesh.indices.iter().max(), Some(&(u16::MAX - 1)));
    Ok(())
  }
}
