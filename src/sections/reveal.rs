//! Fade-up entrance animation for section blocks.
//!
//! An element starts hidden (transparent, pushed down by `offset_y`) and
//! tweens to its resting place once it enters the viewport. With `once`
//! it never hides again; otherwise leaving the viewport resets it.

use crate::config::RevealConfig;
use crate::rendering::{Easing, Tween};

/// Vertical extent of an element relative to the viewport top (px).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBounds {
    pub top: f32,
    pub bottom: f32,
}

/// Whether `bounds` intersects the viewport grown (or, if negative,
/// shrunk) by `root_margin` on the top and bottom edges.
pub fn in_view(bounds: ElementBounds, viewport_height: f32, root_margin: f32) -> bool {
    bounds.top < viewport_height + root_margin && bounds.bottom > -root_margin
}

/// Current visual state of a revealed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub translate_y: f32,
}

impl RevealStyle {
    pub fn to_css(&self) -> String {
        format!(
            "opacity:{};transform:translateY({}px);",
            (self.opacity * 1000.0).round() / 1000.0,
            (self.translate_y * 100.0).round() / 100.0
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum RevealState {
    Hidden,
    Revealing(Tween),
    Visible,
}

#[derive(Debug, Clone)]
pub struct Reveal {
    config: RevealConfig,
    state: RevealState,
}

impl Reveal {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            state: RevealState::Hidden,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.state == RevealState::Hidden
    }

    /// Fully revealed and not animating.
    pub fn is_visible(&self) -> bool {
        self.state == RevealState::Visible
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, RevealState::Revealing(_))
    }

    /// Start the entrance unconditionally (mount-time reveals).
    pub fn trigger(&mut self) {
        if self.is_hidden() {
            self.state = RevealState::Revealing(Tween::new(
                0.0,
                1.0,
                self.config.duration_ms,
                Easing::EaseOut,
            ));
        }
    }

    /// Feed a visibility observation. Returns true when the state changed.
    pub fn observe(&mut self, bounds: ElementBounds, viewport_height: f32) -> bool {
        let visible = in_view(bounds, viewport_height, self.config.root_margin_px);

        if visible && self.is_hidden() {
            self.trigger();
            return true;
        }
        if !visible && !self.config.once && !self.is_hidden() {
            self.state = RevealState::Hidden;
            return true;
        }
        false
    }

    pub fn advance(&mut self, dt_ms: f32) -> RevealStyle {
        if let RevealState::Revealing(tween) = &mut self.state {
            tween.advance(dt_ms);
            if tween.is_finished() {
                self.state = RevealState::Visible;
            }
        }
        self.style()
    }

    pub fn style(&self) -> RevealStyle {
        let progress = match self.state {
            RevealState::Hidden => 0.0,
            RevealState::Revealing(tween) => tween.value(),
            RevealState::Visible => 1.0,
        };

        RevealStyle {
            opacity: progress,
            translate_y: self.config.offset_y * (1.0 - progress),
        }
    }
}
