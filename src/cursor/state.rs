//! Cursor state machine.
//!
//! Two states, `Down` (initial) and `Up`, switched only by primary-button
//! press/release edges. The mode is recomputed from `InteractionFlags` on
//! every read; the machine stores nothing else.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::events::{InteractionFlags, PointerButton};

/// Blade position of the bulldozer icon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../wasm/site/types/")]
pub enum DisplayMode {
    Up,
    #[default]
    Down,
}

impl DisplayMode {
    /// Pressed lifts the blade; hovering an interactive target does not.
    pub fn from_flags(flags: InteractionFlags) -> Self {
        if flags.is_pressed {
            DisplayMode::Up
        } else {
            DisplayMode::Down
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Up => "up",
            DisplayMode::Down => "down",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual posture the renderer keys scale and rotation off. Richer than
/// `DisplayMode`: hovering changes the posture but not the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Posture {
    Pressed,
    Hovering,
    Idle,
}

impl Posture {
    /// Marker posture: press beats hover.
    pub fn from_flags(flags: InteractionFlags) -> Self {
        if flags.is_pressed {
            Posture::Pressed
        } else if flags.is_pointer_target {
            Posture::Hovering
        } else {
            Posture::Idle
        }
    }

    /// Glow posture: hover beats press.
    pub fn glow_from_flags(flags: InteractionFlags) -> Self {
        if flags.is_pointer_target {
            Posture::Hovering
        } else if flags.is_pressed {
            Posture::Pressed
        } else {
            Posture::Idle
        }
    }
}

/// A mode change caused by a button edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: DisplayMode,
    pub to: DisplayMode,
}

#[derive(Debug, Clone, Default)]
pub struct CursorStateMachine {
    flags: InteractionFlags,
}

impl CursorStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flags(&self) -> InteractionFlags {
        self.flags
    }

    pub fn mode(&self) -> DisplayMode {
        DisplayMode::from_flags(self.flags)
    }

    pub fn posture(&self) -> Posture {
        Posture::from_flags(self.flags)
    }

    pub fn press(&mut self, button: PointerButton) -> Option<Transition> {
        if !button.is_primary() {
            return None;
        }
        self.set_pressed(true)
    }

    pub fn release(&mut self, button: PointerButton) -> Option<Transition> {
        if !button.is_primary() {
            return None;
        }
        self.set_pressed(false)
    }

    pub fn set_pointer_target(&mut self, is_pointer_target: bool) {
        self.flags.is_pointer_target = is_pointer_target;
    }

    fn set_pressed(&mut self, pressed: bool) -> Option<Transition> {
        let from = self.mode();
        self.flags.is_pressed = pressed;
        let to = self.mode();
        (from != to).then_some(Transition { from, to })
    }
}
