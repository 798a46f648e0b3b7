//! Shared pointer event source with scoped subscriptions.
//!
//! A `Subscription` removes its handler when dropped, so a mounted overlay
//! releases every listener on all exit paths, including early returns and
//! panics unwinding through the owner.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::events::{PointerEvent, PointerEventKind};

pub type PointerHandler<N> = Box<dyn FnMut(&PointerEvent<N>)>;

/// Anything that can deliver pointer events to subscribers.
pub trait PointerSource<N> {
    fn subscribe(&self, kind: PointerEventKind, handler: PointerHandler<N>) -> Subscription;
}

/// Handle for unregistering a handler.
///
/// When dropped, automatically runs the source's removal hook.
#[must_use = "dropping a Subscription immediately unsubscribes the handler"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription that was never attached (source refused it).
    pub fn inactive() -> Self {
        Self { cancel: None }
    }

    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

struct Listener<N> {
    id: u64,
    kind: PointerEventKind,
    handler: Rc<RefCell<PointerHandler<N>>>,
}

struct HubInner<N> {
    next_id: u64,
    listeners: Vec<Listener<N>>,
}

/// In-process pointer source. Hosts without a native event target (tests,
/// replay tools) push events through `dispatch`.
pub struct PointerHub<N> {
    inner: Rc<RefCell<HubInner<N>>>,
}

impl<N> Clone for PointerHub<N> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<N> Default for PointerHub<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> PointerHub<N> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn listener_count_for(&self, kind: PointerEventKind) -> usize {
        self.inner
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.kind == kind)
            .count()
    }

    /// Deliver `event` to every handler subscribed to its kind, in
    /// subscription order. Handlers may subscribe or unsubscribe while the
    /// event is being delivered; the set of receivers is fixed at entry.
    pub fn dispatch(&self, event: &PointerEvent<N>) {
        let kind = event.kind();
        let handlers: Vec<_> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.kind == kind)
            .map(|l| Rc::clone(&l.handler))
            .collect();

        for handler in handlers {
            (handler.borrow_mut())(event);
        }
    }
}

impl<N: 'static> PointerSource<N> for PointerHub<N> {
    fn subscribe(&self, kind: PointerEventKind, handler: PointerHandler<N>) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push(Listener {
                id,
                kind,
                handler: Rc::new(RefCell::new(handler)),
            });
            id
        };

        let weak: Weak<RefCell<HubInner<N>>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|l| l.id != id);
            }
        })
    }
}
