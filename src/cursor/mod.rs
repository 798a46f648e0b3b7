//! Custom cursor subsystem.
//!
//! Raw pointer events flow one way:
//! `PointerSource` -> `PointerTracker` / classifier -> `CursorStateMachine`
//! -> `CursorRenderer`. `CursorOverlay` owns the wiring and the listener
//! subscriptions for one page session.

pub mod capability;
pub mod classifier;
pub mod events;
pub mod overlay;
pub mod source;
pub mod state;
pub mod tracker;

#[cfg(test)]
mod testing;

pub use capability::{InputCapability, StaticEnvironment, TouchEnvironment};
pub use classifier::{
    classify, closest_interactive, has_pointer_style, Classification, InteractiveSelector,
    TargetNode,
};
pub use events::{
    InteractionFlags, PointerButton, PointerEvent, PointerEventKind, PointerSample, XY,
};
pub use overlay::{CursorOverlay, CursorSnapshot};
pub use source::{PointerHandler, PointerHub, PointerSource, Subscription};
pub use state::{CursorStateMachine, DisplayMode, Posture, Transition};
pub use tracker::PointerTracker;
