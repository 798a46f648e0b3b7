//! Section markup in the page root, plus reveal and typewriter driving.

use folio::config::SectionConfig;
use folio::content::SiteContent;
use folio::sections::{
    render_sections, ElementBounds, Reveal, RevealTrigger, Typewriter, CARET_STYLESHEET,
    CARET_STYLE_ID, REVEAL_ATTR, TYPED_ID,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

struct RevealBlock {
    element: Element,
    reveal: Reveal,
    trigger: RevealTrigger,
}

/// The exported page ships the caret style inline; bare hosts get it here.
fn ensure_caret_style(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(CARET_STYLE_ID).is_some() {
        return Ok(());
    }
    let sheet = document.create_element("style")?;
    sheet.set_id(CARET_STYLE_ID);
    sheet.set_text_content(Some(CARET_STYLESHEET));
    let head = document.head().ok_or("document has no head")?;
    head.append_child(&sheet)?;
    Ok(())
}

pub struct SectionsController {
    window: Window,
    blocks: Vec<RevealBlock>,
    typed: Option<(Element, Typewriter)>,
}

impl SectionsController {
    pub fn mount(
        window: Window,
        root: &Element,
        content: &SiteContent,
        config: &SectionConfig,
    ) -> Result<Self, JsValue> {
        if let Some(document) = root.owner_document() {
            ensure_caret_style(&document)?;
        }
        root.set_inner_html(&render_sections(content));

        let nodes = root.query_selector_all(&format!("[{}]", REVEAL_ATTR))?;
        let mut blocks = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let trigger = element
                .get_attribute(REVEAL_ATTR)
                .as_deref()
                .and_then(RevealTrigger::from_attr)
                .unwrap_or(RevealTrigger::View);

            let mut reveal = Reveal::new(config.reveal);
            if trigger == RevealTrigger::Mount {
                reveal.trigger();
            }
            element.set_attribute("style", &reveal.style().to_css())?;
            blocks.push(RevealBlock {
                element,
                reveal,
                trigger,
            });
        }

        let typed = root
            .query_selector(&format!("#{}", TYPED_ID))?
            .map(|el| (el, Typewriter::new(content.headline.as_slice(), config.typewriter)));
        if let Some((el, tw)) = &typed {
            el.set_text_content(Some(&tw.text()));
        }

        log::info!(
            "[SECTIONS] Mounted {} reveal blocks, typewriter {}",
            blocks.len(),
            if typed.is_some() { "on" } else { "off" }
        );

        Ok(Self {
            window,
            blocks,
            typed,
        })
    }

    pub fn tick(&mut self, dt_ms: f32) -> Result<(), JsValue> {
        let viewport_height = self
            .window
            .inner_height()?
            .as_f64()
            .unwrap_or_default() as f32;

        for block in &mut self.blocks {
            if block.trigger == RevealTrigger::View {
                let rect = block.element.get_bounding_client_rect();
                let bounds = ElementBounds {
                    top: rect.top() as f32,
                    bottom: rect.bottom() as f32,
                };
                if block.reveal.observe(bounds, viewport_height) && block.reveal.is_hidden() {
                    block
                        .element
                        .set_attribute("style", &block.reveal.style().to_css())?;
                }
            }

            if block.reveal.is_animating() {
                let style = block.reveal.advance(dt_ms);
                block.element.set_attribute("style", &style.to_css())?;
            }
        }

        if let Some((el, tw)) = &mut self.typed {
            if tw.tick(dt_ms) {
                el.set_text_content(Some(&tw.text()));
            }
        }

        Ok(())
    }
}
