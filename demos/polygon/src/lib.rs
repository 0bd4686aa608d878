use polyfan_wasm::{DemoConfig, Shaders};
use wasm_bindgen::prelude::*;

const SHADERS: Shaders = Shaders {
  vertex: include_str!("../shaders/main.vert"),
  fragment: include_str!("../shaders/main.frag"),
};

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
  polyfan_wasm::runner::run(DemoConfig::default(), SHADERS)
}
