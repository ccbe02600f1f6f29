/// Display-refresh driven animation loop
use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::RenderError;
use crate::renderer::WebRenderer;

type FrameCallback = Closure<dyn FnMut(f64)>;

fn request_frame(window: &Window, callback: &FrameCallback) -> Result<i32, RenderError> {
    Ok(window.request_animation_frame(callback.as_ref().unchecked_ref())?)
}

/// Render a frame on every animation frame until the page goes away.
///
/// The callback owns the renderer and re-registers itself at the end of each
/// frame, so control returns to the browser between frames.
pub fn run_loop(mut renderer: WebRenderer) -> Result<(), RenderError> {
    let window = web_sys::window().ok_or(RenderError::NoWindow)?;

    // The closure needs a handle to itself to schedule the next frame
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    let frame_window = window.clone();

    *slot.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        renderer.render_frame(timestamp);

        if let Some(callback) = next.borrow().as_ref() {
            if let Err(err) = request_frame(&frame_window, callback) {
                log::error!("animation stopped: {}", err);
            }
        }
    }));

    let first = slot.borrow();
    match first.as_ref() {
        Some(callback) => request_frame(&window, callback).map(|_| ()),
        None => Ok(()),
    }
}
