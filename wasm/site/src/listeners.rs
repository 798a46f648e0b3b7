//! `window` mouse listeners exposed as a `PointerSource`.
//!
//! Each subscription owns its JS closure. Cancelling removes the listener
//! first and then drops the closure, so the browser never calls into a
//! freed callback.

use folio::cursor::{
    PointerButton, PointerEvent, PointerEventKind, PointerHandler, PointerSource, Subscription,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, Window};

use crate::dom::DomNode;

pub struct WindowPointerSource {
    window: Window,
}

impl WindowPointerSource {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

fn translate(kind: PointerEventKind, event: &MouseEvent) -> PointerEvent<DomNode> {
    match kind {
        PointerEventKind::Move => {
            let target = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .map(DomNode);
            PointerEvent::moved(event.client_x() as f32, event.client_y() as f32, target)
        },
        PointerEventKind::Down => PointerEvent::Down {
            button: PointerButton::from_dom(event.button()),
        },
        PointerEventKind::Up => PointerEvent::Up {
            button: PointerButton::from_dom(event.button()),
        },
    }
}

impl PointerSource<DomNode> for WindowPointerSource {
    fn subscribe(&self, kind: PointerEventKind, mut handler: PointerHandler<DomNode>) -> Subscription {
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            handler(&translate(kind, &event));
        }) as Box<dyn FnMut(_)>);

        let name = kind.dom_event_name();
        if let Err(err) = self
            .window
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
        {
            log::warn!("[WEB] Failed to add {} listener: {:?}", name, err);
            return Subscription::inactive();
        }

        let window = self.window.clone();
        Subscription::new(move || {
            if let Err(err) =
                window.remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            {
                log::warn!("[WEB] Failed to remove {} listener: {:?}", name, err);
            }
            drop(closure);
        })
    }
}
