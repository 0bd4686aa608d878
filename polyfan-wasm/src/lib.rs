pub mod config;
pub mod runner;
pub mod surface;

pub use config::DemoConfig;
pub use surface::{Shaders, WebGlSurface};

pub mod playground {
  use wasm_bindgen::{JsCast, JsValue, UnwrapThrowExt};
  use web_sys::{HtmlCanvasElement, WebGlRenderingContext};

  pub fn window() -> web_sys::Window {
    web_sys::window().unwrap_throw()
  }

  pub fn document() -> web_sys::Document {
    window().document().unwrap_throw()
  }

  /// Window width and height in CSS pixels.
  pub fn inner_size() -> (f64, f64) {
    let window = window();
    let width = window.inner_width().ok().and_then(|v| v.as_f64());
    let height = window.inner_height().ok().and_then(|v| v.as_f64());
    (width.unwrap_or(0.0), height.unwrap_or(0.0))
  }

  pub fn canvas(id: &str) -> Result<HtmlCanvasElement, JsValue> {
    document()
      .get_element_by_id(id)
      .ok_or_else(|| JsValue::from(format!("no element with id {:?}", id)))?
      .dyn_into::<HtmlCanvasElement>()
      .map_err(|_| JsValue::from(format!("element {:?} is not a canvas", id)))
  }

  pub fn webgl_context(canvas: &HtmlCanvasElement) -> Result<WebGlRenderingContext, JsValue> {
    canvas
      .get_context("webgl")?
      .ok_or("WebGL not supported")?
      .dyn_into::<WebGlRenderingContext>()
      .map_err(|_| JsValue::from("context is not a WebGlRenderingContext"))
  }

  pub fn set_canvas_size(canvas: &HtmlCanvasElement, size: u32) {
    canvas.set_width(size);
    canvas.set_height(size);
  }
}

pub mod console {
  pub fn info(message: &str) {
    web_sys::console::info_1(&message.into());
  }

  pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
  }
}
