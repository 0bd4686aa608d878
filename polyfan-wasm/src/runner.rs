use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use polyfan::input::Toggle;
use polyfan::render::{render_frame, RenderState};
use wasm_bindgen::{JsCast, JsValue, UnwrapThrowExt};
use web_sys::{Element, HtmlCanvasElement, MouseEvent};

use super::config::{DemoConfig, RADIUS_ATTRIBUTE, VERTICES_ATTRIBUTE};
use super::console;
use super::playground::*;
use super::surface::{Shaders, WebGlSurface};

struct App {
  canvas: HtmlCanvasElement,
  surface: WebGlSurface,
  state: RenderState,
}

impl App {
  fn frame(&mut self) {
    render_frame(&self.state, &mut self.surface);
  }

  fn resize(&mut self) {
    let (width, height) = inner_size();
    let size = self.state.resize(width, height);
    set_canvas_size(&self.canvas, size);
  }
}

/// Set up the canvas, shaders and listeners described by `config`, then
/// render once per animation frame until the page goes away.
pub fn run(mut config: DemoConfig, shaders: Shaders) -> Result<(), JsValue> {
  std::panic::set_hook(Box::new(console_error_panic_hook::hook));

  let canvas = canvas(&config.canvas_id)?;
  let rejected = config.apply_overrides(
    canvas.get_attribute(VERTICES_ATTRIBUTE).as_deref(),
    canvas.get_attribute(RADIUS_ATTRIBUTE).as_deref(),
  );
  for message in rejected {
    console::warn(&format!("ignoring {}", message));
  }

  let gl = webgl_context(&canvas)?;
  let surface = WebGlSurface::new(gl, shaders)?;
  console::info(&format!(
    "polyfan: {} vertices, radius {}",
    config.spec.vertex_count(),
    config.spec.radius()
  ));

  let app = Rc::new(RefCell::new(App {
    canvas,
    surface,
    state: RenderState::new(config.spec),
  }));
  app.borrow_mut().resize();

  on_resize(Rc::clone(&app));
  on_pointer_move(Rc::clone(&app));
  on_toggles(&config, Rc::clone(&app))?;

  schedule(app, Rc::new(RefCell::new(None)));
  Ok(())
}

fn on_resize(app: Rc<RefCell<App>>) {
  let listener = EventListener::new(&window(), "resize", move |_event| {
    let mut app = app.borrow_mut();
    app.resize();
    app.frame();
  });
  listener.forget();
}

fn on_pointer_move(app: Rc<RefCell<App>>) {
  let listener = EventListener::new(&window(), "mousemove", move |event| {
    let event = event.dyn_ref::<MouseEvent>().unwrap_throw();
    let (width, height) = inner_size();
    app.borrow_mut().state.pointer_moved(
      f64::from(event.client_x()),
      f64::from(event.client_y()),
      width,
      height,
    );
  });
  listener.forget();
}

fn on_toggles(config: &DemoConfig, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
  let nodes = document().query_selector_all(&config.toggle_selector())?;
  for idx in 0..nodes.length() {
    let element = match nodes.get(idx).and_then(|node| node.dyn_into::<Element>().ok()) {
      Some(element) => element,
      None => continue,
    };
    let attribute = config.toggle_attribute.clone();
    let app = Rc::clone(&app);
    let target = element.clone();
    let listener = EventListener::new(&element, "click", move |_event| {
      let value = target.get_attribute(&attribute).unwrap_or_default();
      match value.parse::<Toggle>() {
        Ok(toggle) => {
          let mut app = app.borrow_mut();
          if app.state.toggle(toggle) {
            console::info(&format!(
              "{}: {} vertices",
              toggle,
              app.state.spec.vertex_count()
            ));
          }
        }
        Err(err) => console::warn(&format!("{}={:?}: {}", attribute, value, err)),
      }
    });
    listener.forget();
  }
  Ok(())
}

// Each tick renders a frame and requests the next one. The pending frame is
// kept in `slot`; dropping it would cancel the loop.
fn schedule(app: Rc<RefCell<App>>, slot: Rc<RefCell<Option<AnimationFrame>>>) {
  let next = Rc::clone(&slot);
  let frame = request_animation_frame(move |_timestamp| {
    app.borrow_mut().frame();
    schedule(app, next);
  });
  *slot.borrow_mut() = Some(frame);
}
