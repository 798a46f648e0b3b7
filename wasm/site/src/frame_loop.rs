//! `requestAnimationFrame` loop that stops when dropped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Frames longer than this (background tab, debugger pause) are clamped so
/// springs do not jump.
const MAX_FRAME_MS: f64 = 100.0;

type FrameClosure = Closure<dyn FnMut(f64)>;

pub struct AnimationLoop {
    window: Window,
    closure: Rc<RefCell<Option<FrameClosure>>>,
    handle: Rc<Cell<Option<i32>>>,
}

impl AnimationLoop {
    /// Start calling `on_frame(dt_ms)` once per display frame.
    pub fn start(window: Window, mut on_frame: impl FnMut(f32) + 'static) -> Result<Self, JsValue> {
        let closure: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));

        let next_closure = Rc::clone(&closure);
        let next_handle = Rc::clone(&handle);
        let next_window = window.clone();
        let mut last: Option<f64> = None;

        *closure.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            let dt = last.map_or(0.0, |prev| (now - prev).clamp(0.0, MAX_FRAME_MS));
            last = Some(now);
            on_frame(dt as f32);

            // Loop was stopped while this frame ran
            if next_handle.get().is_none() {
                return;
            }
            if let Some(cb) = next_closure.borrow().as_ref() {
                match next_window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => next_handle.set(Some(id)),
                    Err(err) => {
                        log::error!("[WEB] requestAnimationFrame failed: {:?}", err);
                        next_handle.set(None);
                    },
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let id = {
            let cb = closure.borrow();
            let cb = cb.as_ref().ok_or("frame closure missing")?;
            window.request_animation_frame(cb.as_ref().unchecked_ref())?
        };
        handle.set(Some(id));

        Ok(Self {
            window,
            closure,
            handle,
        })
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Some(id) = self.handle.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // Breaks the closure -> Rc -> closure cycle
        self.closure.borrow_mut().take();
    }
}
