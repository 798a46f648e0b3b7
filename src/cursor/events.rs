//! Pointer event types consumed by the cursor subsystem.
//!
//! Hosts translate their native mouse events into `PointerEvent<N>`, where
//! `N` is the host's element handle (a DOM element in the browser, an
//! in-memory node in tests).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 2D coordinate helper type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../wasm/site/types/")]
pub struct XY<T> {
    pub x: T,
    pub y: T,
}

impl<T> XY<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy> XY<T> {
    pub fn map<U, F: Fn(T) -> U>(&self, f: F) -> XY<U> {
        XY {
            x: f(self.x),
            y: f(self.y),
        }
    }
}

impl XY<f32> {
    /// Shift both axes back by `offset` (centers a square of side `2 * offset`).
    pub fn minus(&self, offset: f32) -> XY<f32> {
        self.map(|v| v - offset)
    }
}

/// Latest observed pointer coordinates in viewport space.
pub type PointerSample = XY<f32>;

/// Derived interaction booleans the state machine works from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../wasm/site/types/")]
pub struct InteractionFlags {
    /// The element under the pointer looks clickable.
    pub is_pointer_target: bool,
    /// The primary button is held down.
    pub is_pressed: bool,
}

/// Mouse button, numbered like DOM `MouseEvent.button`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    Other(i16),
}

impl PointerButton {
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => PointerButton::Primary,
            1 => PointerButton::Middle,
            2 => PointerButton::Secondary,
            other => PointerButton::Other(other),
        }
    }

    pub fn is_primary(self) -> bool {
        matches!(self, PointerButton::Primary)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Move,
    Down,
    Up,
}

impl PointerEventKind {
    pub const ALL: [PointerEventKind; 3] = [
        PointerEventKind::Move,
        PointerEventKind::Down,
        PointerEventKind::Up,
    ];

    /// DOM event name the browser host listens for.
    pub fn dom_event_name(self) -> &'static str {
        match self {
            PointerEventKind::Move => "mousemove",
            PointerEventKind::Down => "mousedown",
            PointerEventKind::Up => "mouseup",
        }
    }
}

/// A raw pointer event.
#[derive(Debug, Clone)]
pub enum PointerEvent<N> {
    /// Pointer moved; `target` is the element that received the event.
    Move {
        position: PointerSample,
        target: Option<N>,
    },
    Down {
        button: PointerButton,
    },
    Up {
        button: PointerButton,
    },
}

impl<N> PointerEvent<N> {
    pub fn moved(x: f32, y: f32, target: Option<N>) -> Self {
        PointerEvent::Move {
            position: XY::new(x, y),
            target,
        }
    }

    pub fn kind(&self) -> PointerEventKind {
        match self {
            PointerEvent::Move { .. } => PointerEventKind::Move,
            PointerEvent::Down { .. } => PointerEventKind::Down,
            PointerEvent::Up { .. } => PointerEventKind::Up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_from_dom() {
        assert_eq!(PointerButton::from_dom(0), PointerButton::Primary);
        assert_eq!(PointerButton::from_dom(2), PointerButton::Secondary);
        assert_eq!(PointerButton::from_dom(4), PointerButton::Other(4));
        assert!(!PointerButton::Middle.is_primary());
    }

    #[test]
    fn test_event_kind() {
        let event: PointerEvent<()> = PointerEvent::moved(3.0, 4.0, None);
        assert_eq!(event.kind(), PointerEventKind::Move);
        assert_eq!(event.kind().dom_event_name(), "mousemove");
    }

    #[test]
    fn test_minus_offset() {
        let sample = PointerSample::new(100.0, 40.0);
        assert_eq!(sample.minus(18.0), XY::new(82.0, 22.0));
    }
}
