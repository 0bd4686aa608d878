use js_sys::{Float32Array, Uint16Array};
use polyfan::data::{Color, Mesh, Pointer};
use polyfan::render::Surface;
use wasm_bindgen::JsValue;
use web_sys::{WebGlBuffer, WebGlProgram, WebGlRenderingContext as GL, WebGlShader, WebGlUniformLocation};

/// Sources of the vertex and fragment stages.
///
/// The vertex stage must declare the attributes `position` (vec3) and `color`
/// (vec4) and may declare the uniform `mouse` (vec2).
#[derive(Debug, Clone, Copy)]
pub struct Shaders {
  pub vertex: &'static str,
  pub fragment: &'static str,
}

/// WebGL 1 surface. Buffers and locations are created once; `upload`
/// overwrites the buffer contents every frame.
pub struct WebGlSurface {
  gl: GL,
  positions: WebGlBuffer,
  colors: WebGlBuffer,
  indices: WebGlBuffer,
  mouse: Option<WebGlUniformLocation>,
}

impl WebGlSurface {
  pub fn new(gl: GL, shaders: Shaders) -> Result<WebGlSurface, JsValue> {
    let vertex = compile_shader(&gl, GL::VERTEX_SHADER, shaders.vertex)?;
    let fragment = compile_shader(&gl, GL::FRAGMENT_SHADER, shaders.fragment)?;
    let program = link_program(&gl, &vertex, &fragment)?;
    gl.use_program(Some(&program));

    let positions = create_buffer(&gl)?;
    let colors = create_buffer(&gl)?;
    let indices = create_buffer(&gl)?;

    enable_attribute(&gl, &program, "position", &positions, 3)?;
    enable_attribute(&gl, &program, "color", &colors, 4)?;
    gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&indices));

    // Unused uniforms are optimized away, so a missing location is not an error.
    let mouse = gl.get_uniform_location(&program, "mouse");

    Ok(WebGlSurface {
      gl,
      positions,
      colors,
      indices,
      mouse,
    })
  }
}

impl Surface for WebGlSurface {
  fn upload(&mut self, mesh: &Mesh) {
    let gl = &self.gl;

    let positions = Float32Array::from(&mesh.flat_positions()[..]);
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.positions));
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &positions, GL::DYNAMIC_DRAW);

    let colors = Float32Array::from(&mesh.flat_colors()[..]);
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.colors));
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &colors, GL::DYNAMIC_DRAW);

    let indices = Uint16Array::from(&mesh.indices[..]);
    gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&self.indices));
    gl.buffer_data_with_array_buffer_view(GL::ELEMENT_ARRAY_BUFFER, &indices, GL::DYNAMIC_DRAW);
  }

  fn viewport(&mut self, size: u32) {
    let size = i32::try_from(size).unwrap_or(i32::MAX);
    self.gl.viewport(0, 0, size, size);
  }

  fn clear(&mut self, color: Color) {
    self.gl.clear_color(color.r(), color.g(), color.b(), color.a());
    self.gl.clear(GL::COLOR_BUFFER_BIT);
  }

  fn set_pointer(&mut self, pointer: Pointer) {
    self
      .gl
      .uniform2fv_with_f32_array(self.mouse.as_ref(), &pointer.as_array());
  }

  fn draw_indexed(&mut self, count: usize) {
    let count = i32::try_from(count).unwrap_or(i32::MAX);
    self
      .gl
      .draw_elements_with_i32(GL::TRIANGLES, count, GL::UNSIGNED_SHORT, 0);
  }
}

pub fn compile_shader(gl: &GL, shader_type: u32, source: &str) -> Result<WebGlShader, JsValue> {
  let shader = gl
    .create_shader(shader_type)
    .ok_or("could not create shader")?;
  gl.shader_source(&shader, source);
  gl.compile_shader(&shader);
  if gl
    .get_shader_parameter(&shader, GL::COMPILE_STATUS)
    .as_bool()
    .unwrap_or(false)
  {
    Ok(shader)
  } else {
    Err(JsValue::from(gl.get_shader_info_log(&shader).unwrap_or_default()))
  }
}

pub fn link_program(gl: &GL, vertex: &WebGlShader, fragment: &WebGlShader) -> Result<WebGlProgram, JsValue> {
  let program = gl.create_program().ok_or("could not create program")?;
  gl.attach_shader(&program, vertex);
  gl.attach_shader(&program, fragment);
  gl.link_program(&program);
  if gl
    .get_program_parameter(&program, GL::LINK_STATUS)
    .as_bool()
    .unwrap_or(false)
  {
    Ok(program)
  } else {
    Err(JsValue::from(gl.get_program_info_log(&program).unwrap_or_default()))
  }
}

fn create_buffer(gl: &GL) -> Result<WebGlBuffer, JsValue> {
  gl.create_buffer().ok_or_else(|| "could not create buffer".into())
}

// Point attribute `name` at `buffer`, `size` floats per vertex, tightly packed.
fn enable_attribute(gl: &GL, program: &WebGlProgram, name: &str, buffer: &WebGlBuffer, size: i32) -> Result<(), JsValue> {
  let location = u32::try_from(gl.get_attrib_location(program, name))
    .map_err(|_| JsValue::from(format!("attribute {:?} not found", name)))?;
  gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
  gl.enable_vertex_attrib_array(location);
  gl.vertex_attrib_pointer_with_i32(location, size, GL::FLOAT, false, 0, 0);
  Ok(())
}
