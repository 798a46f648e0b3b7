//! Overlay DOM: glow, marker and pulse layers appended to `<body>`.

use folio::cursor::DisplayMode;
use folio::rendering::style::{
    self, GLOW_INNER_STYLE, GLOW_STYLE, MARKER_STYLE, PULSE_INNER_STYLE, PULSE_STYLE,
    RESPONSIVE_CLASS,
};
use folio::rendering::{bulldozer_svg, CursorFrame};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

const STYLESHEET_ID: &str = "folio-cursor-style";

pub struct OverlayElements {
    document: Document,
    glow: Element,
    marker: Element,
    marker_inner: Element,
    pulse: Element,
    icon_size: u32,
    mode: Option<DisplayMode>,
    shadow: Option<bool>,
}

fn layer(document: &Document, class: &str, inner_style: &str) -> Result<(Element, Element), JsValue> {
    let outer = document.create_element("div")?;
    if !class.is_empty() {
        outer.set_class_name(class);
    }
    outer.set_attribute("aria-hidden", "true")?;

    let inner = document.create_element("div")?;
    inner.set_attribute("style", inner_style)?;
    outer.append_child(&inner)?;
    Ok((outer, inner))
}

impl OverlayElements {
    pub fn create(document: &Document, icon_size: u32) -> Result<Self, JsValue> {
        let body = document.body().ok_or("document has no body")?;

        if document.get_element_by_id(STYLESHEET_ID).is_none() {
            let sheet = document.create_element("style")?;
            sheet.set_id(STYLESHEET_ID);
            sheet.set_text_content(Some(style::OVERLAY_STYLESHEET));
            let head = document.head().ok_or("document has no head")?;
            head.append_child(&sheet)?;
        }

        let (glow, _) = layer(document, RESPONSIVE_CLASS, GLOW_INNER_STYLE)?;
        let (marker, marker_inner) = layer(document, RESPONSIVE_CLASS, "")?;
        // The pulse is not hidden on narrow viewports
        let (pulse, _) = layer(document, "", PULSE_INNER_STYLE)?;

        glow.set_attribute("style", &format!("{}opacity:0;", GLOW_STYLE))?;
        marker.set_attribute("style", MARKER_STYLE)?;
        pulse.set_attribute("style", &format!("{}opacity:0;", PULSE_STYLE))?;

        body.append_child(&glow)?;
        body.append_child(&marker)?;
        body.append_child(&pulse)?;

        if let Some(root) = document.document_element() {
            root.class_list().add_1(style::ACTIVE_CLASS)?;
        }

        log::debug!("[WEB] Cursor overlay elements created");

        Ok(Self {
            document: document.clone(),
            glow,
            marker,
            marker_inner,
            pulse,
            icon_size,
            mode: None,
            shadow: None,
        })
    }

    pub fn apply(&mut self, frame: &CursorFrame) -> Result<(), JsValue> {
        let marker = &frame.marker;

        if self.mode != Some(marker.mode) {
            self.marker_inner
                .set_inner_html(&bulldozer_svg(marker.mode, self.icon_size));
            self.mode = Some(marker.mode);
        }
        if self.shadow != Some(marker.shadow) {
            self.marker_inner
                .set_attribute("style", &style::marker_inner_style(marker.shadow))?;
            self.shadow = Some(marker.shadow);
        }

        self.marker.set_attribute(
            "style",
            &format!("{}transform:{};", MARKER_STYLE, style::marker_transform(marker)),
        )?;

        let glow_style = match &frame.glow {
            Some(glow) => format!("{}transform:{};", GLOW_STYLE, style::glow_transform(glow)),
            None => format!("{}opacity:0;", GLOW_STYLE),
        };
        self.glow.set_attribute("style", &glow_style)?;

        let pulse_style = match &frame.pulse {
            Some(pulse) => style::pulse_style(pulse),
            None => format!("{}opacity:0;", PULSE_STYLE),
        };
        self.pulse.set_attribute("style", &pulse_style)?;

        Ok(())
    }
}

impl Drop for OverlayElements {
    fn drop(&mut self) {
        self.glow.remove();
        self.marker.remove();
        self.pulse.remove();
        if let Some(root) = self.document.document_element() {
            let _ = root.class_list().remove_1(style::ACTIVE_CLASS);
        }
        log::debug!("[WEB] Cursor overlay elements removed");
    }
}
