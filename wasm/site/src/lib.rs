//! Browser host for the portfolio site.
//!
//! `Site.mount(rootId, config?)` renders the sections into the root element,
//! mounts the cursor overlay on `window` mouse events and starts one
//! `requestAnimationFrame` loop driving springs, reveals and the typewriter.
//! Everything is released by `Site.destroy()` or when the JS handle is freed.

mod dom;
mod environment;
mod frame_loop;
mod listeners;
mod overlay;
mod sections;

use std::cell::RefCell;
use std::rc::Rc;

use folio::content::{education_items, personal_info, SiteContent};
use folio::{CursorOverlay, FolioError, SiteConfig, Theme};
use wasm_bindgen::prelude::*;

use crate::dom::DomNode;
use crate::environment::BrowserEnvironment;
use crate::frame_loop::AnimationLoop;
use crate::listeners::WindowPointerSource;
use crate::overlay::OverlayElements;
use crate::sections::SectionsController;

/// Initialize panic hook and logging for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("[WEB] Folio module initialized");
}

fn js_error(err: FolioError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_config(config: JsValue) -> Result<SiteConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(SiteConfig::default());
    }
    let json = js_sys::JSON::stringify(&config)
        .map(String::from)
        .map_err(|_| js_error(FolioError::Config("config is not JSON".to_string())))?;
    SiteConfig::from_json(&json).map_err(js_error)
}

struct SiteState {
    cursor: CursorOverlay,
    elements: Option<OverlayElements>,
    sections: SectionsController,
}

impl SiteState {
    fn frame(&mut self, dt_ms: f32) {
        if let Some(frame) = self.cursor.advance(dt_ms) {
            if let Some(elements) = self.elements.as_mut() {
                if let Err(err) = elements.apply(&frame) {
                    log::warn!("[WEB] Cursor frame not applied: {:?}", err);
                }
            }
        }
        if let Err(err) = self.sections.tick(dt_ms) {
            log::warn!("[WEB] Section tick failed: {:?}", err);
        }
    }
}

/// A mounted page.
#[wasm_bindgen]
pub struct Site {
    state: Rc<RefCell<SiteState>>,
    frame_loop: Option<AnimationLoop>,
}

#[wasm_bindgen]
impl Site {
    /// Render into `#root_id` and start the cursor overlay.
    pub fn mount(root_id: &str, config: JsValue) -> Result<Site, JsValue> {
        let config = parse_config(config)?;

        let window = web_sys::window().ok_or("No window")?;
        let document = window.document().ok_or("No document")?;
        let root = document
            .get_element_by_id(root_id)
            .ok_or_else(|| js_error(FolioError::Dom(format!("#{} not found", root_id))))?;

        let theme = document
            .document_element()
            .map(|el| Theme::from_class_list(&el.class_name()))
            .unwrap_or_default();

        let content = SiteContent::load();
        let sections =
            SectionsController::mount(window.clone(), &root, &content, &config.sections)?;

        let source = WindowPointerSource::new(window.clone());
        let env = BrowserEnvironment::new(window.clone());
        let icon_size = config.cursor.icon_size;
        let cursor = CursorOverlay::mount::<DomNode, _, _>(&source, &env, theme, config.cursor);

        let elements = if cursor.is_visible() {
            Some(OverlayElements::create(&document, icon_size)?)
        } else {
            None
        };

        let state = Rc::new(RefCell::new(SiteState {
            cursor,
            elements,
            sections,
        }));

        let frame_state = Rc::clone(&state);
        let frame_loop = AnimationLoop::start(window, move |dt_ms| {
            frame_state.borrow_mut().frame(dt_ms);
        })?;

        log::info!("[WEB] Site mounted on #{} ({} theme)", root_id, theme);

        Ok(Site {
            state,
            frame_loop: Some(frame_loop),
        })
    }

    /// Follow the page's theme toggle.
    #[wasm_bindgen(js_name = setDark)]
    pub fn set_dark(&self, dark: bool) {
        self.state
            .borrow()
            .cursor
            .set_theme(Theme::from_dark_flag(dark));
    }

    #[wasm_bindgen(js_name = isDark)]
    pub fn is_dark(&self) -> bool {
        self.state.borrow().cursor.theme().is_dark()
    }

    /// Current cursor state as a plain object.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = self.state.borrow().cursor.snapshot();
        serde_wasm_bindgen::to_value(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Stop animating and release listeners and overlay elements.
    pub fn destroy(&mut self) {
        self.frame_loop.take();
        let mut state = self.state.borrow_mut();
        state.cursor.unmount();
        state.elements.take();
        log::info!("[WEB] Site destroyed");
    }
}

impl Drop for Site {
    fn drop(&mut self) {
        if self.frame_loop.is_some() {
            self.destroy();
        }
    }
}

#[wasm_bindgen(js_name = educationItems)]
pub fn education_items_js() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&education_items()).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = personalInfo)]
pub fn personal_info_js() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&personal_info()).map_err(|e| JsValue::from_str(&e.to_string()))
}
