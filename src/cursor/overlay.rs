//! Mounted cursor overlay: wires a pointer source to tracker, classifier,
//! state machine and renderer.
//!
//! Lifecycle:
//! 1. `mount` checks input capability once; touch devices get an inert
//!    overlay with no listeners
//! 2. pointer handlers update state synchronously
//! 3. the host frame loop calls `advance` to step the springs
//! 4. `unmount` (or drop) releases every listener

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::Serialize;
use ts_rs::TS;

use super::capability::{InputCapability, TouchEnvironment};
use super::classifier::{classify, TargetNode};
use super::events::{InteractionFlags, PointerEvent, PointerEventKind, PointerSample};
use super::source::{PointerSource, Subscription};
use super::state::{CursorStateMachine, DisplayMode};
use super::tracker::PointerTracker;
use super::XY;
use crate::config::CursorConfig;
use crate::rendering::{CursorFrame, CursorRenderer, RenderTarget};
use crate::theme::Theme;

/// Point-in-time view of the cursor state, for hosts and debugging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../wasm/site/types/")]
pub struct CursorSnapshot {
    pub visible: bool,
    pub sample: PointerSample,
    pub flags: InteractionFlags,
    pub mode: DisplayMode,
}

struct CursorCore {
    tracker: PointerTracker,
    machine: CursorStateMachine,
    renderer: CursorRenderer,
    theme: Theme,
}

impl CursorCore {
    fn on_event<N: TargetNode + Clone>(&mut self, event: &PointerEvent<N>) {
        match event {
            PointerEvent::Move { position, target } => {
                self.tracker.record(*position);

                // No target: keep whatever we decided last time
                if let Some(node) = target {
                    let classification = classify(node);
                    let hovering = classification.is_pointer_target();
                    if hovering != self.machine.flags().is_pointer_target {
                        log::trace!(
                            "[CURSOR] Pointer target: {} ({:?})",
                            hovering,
                            classification
                        );
                    }
                    self.machine.set_pointer_target(hovering);
                }

                if self.tracker.move_count() == 1 {
                    self.renderer.place(self.render_target());
                    return;
                }
            },
            PointerEvent::Down { button } => {
                if let Some(t) = self.machine.press(*button) {
                    log::debug!("[CURSOR] Mode {} -> {}", t.from, t.to);
                }
            },
            PointerEvent::Up { button } => {
                if let Some(t) = self.machine.release(*button) {
                    log::debug!("[CURSOR] Mode {} -> {}", t.from, t.to);
                }
            },
        }

        self.sync();
    }

    fn render_target(&self) -> RenderTarget {
        RenderTarget::new(self.tracker.sample(), self.machine.flags(), self.theme)
    }

    fn sync(&mut self) {
        let target = self.render_target();
        self.renderer.retarget(target);
    }
}

/// The cursor subsystem for one page session.
pub struct CursorOverlay {
    core: Rc<RefCell<CursorCore>>,
    visible: bool,
    subscriptions: Vec<Subscription>,
}

impl CursorOverlay {
    pub fn mount<N, S, E>(source: &S, env: &E, theme: Theme, config: CursorConfig) -> Self
    where
        N: TargetNode + Clone + 'static,
        S: PointerSource<N> + ?Sized,
        E: TouchEnvironment + ?Sized,
    {
        let capability = InputCapability::detect(env);
        let core = Rc::new(RefCell::new(CursorCore {
            tracker: PointerTracker::new(),
            machine: CursorStateMachine::new(),
            renderer: CursorRenderer::new(config),
            theme,
        }));

        if !capability.shows_cursor() {
            log::info!("[CURSOR] Touch input detected, custom cursor disabled");
            return Self {
                core,
                visible: false,
                subscriptions: Vec::new(),
            };
        }

        let subscriptions = PointerEventKind::ALL
            .into_iter()
            .map(|kind| {
                let weak: Weak<RefCell<CursorCore>> = Rc::downgrade(&core);
                source.subscribe(
                    kind,
                    Box::new(move |event: &PointerEvent<N>| {
                        if let Some(core) = weak.upgrade() {
                            core.borrow_mut().on_event(event);
                        }
                    }),
                )
            })
            .collect::<Vec<_>>();

        log::info!(
            "[CURSOR] Mounted ({} listeners, theme {})",
            subscriptions.len(),
            theme
        );

        Self {
            core,
            visible: true,
            subscriptions,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn snapshot(&self) -> CursorSnapshot {
        let core = self.core.borrow();
        CursorSnapshot {
            visible: self.visible,
            sample: core.tracker.sample(),
            flags: core.machine.flags(),
            mode: core.machine.mode(),
        }
    }

    /// Where the marker is heading: latest sample minus the anchor offset.
    pub fn marker_target(&self) -> XY<f32> {
        self.core.borrow().renderer.marker_target()
    }

    pub fn theme(&self) -> Theme {
        self.core.borrow().theme
    }

    pub fn set_theme(&self, theme: Theme) {
        let mut core = self.core.borrow_mut();
        if core.theme != theme {
            log::debug!("[CURSOR] Theme -> {}", theme);
            core.theme = theme;
            core.sync();
        }
    }

    pub fn is_settled(&self) -> bool {
        self.core.borrow().renderer.is_settled()
    }

    /// Step the springs. `None` when the overlay is hidden.
    pub fn advance(&self, dt_ms: f32) -> Option<CursorFrame> {
        if !self.visible {
            return None;
        }
        Some(self.core.borrow_mut().renderer.advance(dt_ms))
    }

    /// Release every listener and hide the overlay.
    pub fn unmount(&mut self) {
        if !self.visible && self.subscriptions.is_empty() {
            return;
        }
        let released = self.subscriptions.len();
        self.subscriptions.clear();
        self.visible = false;
        log::info!("[CURSOR] Unmounted ({} listeners released)", released);
    }
}

impl std::fmt::Debug for CursorOverlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorOverlay")
            .field("visible", &self.visible)
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}
