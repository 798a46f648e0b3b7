//! Touch capability flags read from `window` and `navigator`.

use folio::cursor::TouchEnvironment;
use wasm_bindgen::JsValue;
use web_sys::Window;

pub struct BrowserEnvironment {
    window: Window,
}

impl BrowserEnvironment {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl TouchEnvironment for BrowserEnvironment {
    fn has_touch_start(&self) -> bool {
        js_sys::Reflect::has(&self.window, &JsValue::from_str("ontouchstart")).unwrap_or(false)
    }

    fn max_touch_points(&self) -> Option<i32> {
        Some(self.window.navigator().max_touch_points())
    }

    fn ms_max_touch_points(&self) -> Option<i32> {
        // Legacy IE/Edge property, absent everywhere else
        js_sys::Reflect::get(&self.window.navigator(), &JsValue::from_str("msMaxTouchPoints"))
            .ok()
            .and_then(|v| v.as_f64())
            .map(|n| n as i32)
    }
}
