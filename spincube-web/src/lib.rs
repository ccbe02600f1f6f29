/// Spincube Web - WASM WebGL renderer for the spinning cube
///
/// Acquires a WebGL context on the page's canvas, uploads the cube once and
/// redraws it on every animation frame.

use spincube_core::SceneConfig;
use wasm_bindgen::prelude::*;

pub mod canvas;
pub mod error;
pub mod frame_loop;
pub mod program;
pub mod renderer;

pub use error::RenderError;
pub use renderer::{GpuScene, WebRenderer};

/// Set up logging and panic reporting, then start drawing on the default canvas
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
    }

    let config = SceneConfig::default();
    log::info!("starting on canvas `{}`", config.canvas_id);

    let renderer = WebRenderer::with_config(&config).map_err(|err| {
        log::error!("startup failed: {}", err);
        err
    })?;
    frame_loop::run_loop(renderer)?;

    Ok(())
}
