//! Cursor renderer: turns pointer state into spring-smoothed overlay frames.
//!
//! Three layers:
//! 1. Marker: the bulldozer icon, offset by the anchor, scaled and rotated
//!    by posture (pressed, hovering, idle)
//! 2. Glow: a soft dark-mode spotlight trailing on a softer spring
//! 3. Pulse: a dark-mode ring spawned on press that expands and fades out
//!
//! The renderer only stores spring state and the last target; feeding it the
//! same target twice changes nothing.

use serde::Serialize;
use ts_rs::TS;

use super::spring::{RestThreshold, SpringValue};
use super::tween::{Easing, Tween};
use crate::config::CursorConfig;
use crate::cursor::{DisplayMode, InteractionFlags, PointerSample, Posture, XY};
use crate::theme::Theme;

/// Everything the renderer animates toward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTarget {
    pub position: PointerSample,
    pub flags: InteractionFlags,
    pub mode: DisplayMode,
    pub theme: Theme,
}

impl RenderTarget {
    pub fn new(position: PointerSample, flags: InteractionFlags, theme: Theme) -> Self {
        Self {
            position,
            flags,
            mode: DisplayMode::from_flags(flags),
            theme,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../wasm/site/types/")]
pub struct MarkerFrame {
    pub position: XY<f32>,
    pub scale: f32,
    pub rotation_deg: f32,
    pub mode: DisplayMode,
    /// Soft white halo around the icon (dark mode).
    pub shadow: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../wasm/site/types/")]
pub struct GlowFrame {
    pub position: XY<f32>,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../wasm/site/types/")]
pub struct PulseFrame {
    pub position: XY<f32>,
    pub scale: f32,
    pub opacity: f32,
}

/// One rendered frame of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../wasm/site/types/")]
pub struct CursorFrame {
    pub marker: MarkerFrame,
    pub glow: Option<GlowFrame>,
    pub pulse: Option<PulseFrame>,
}

#[derive(Debug, Clone, Copy)]
struct MarkerAnimator {
    x: SpringValue,
    y: SpringValue,
    scale: SpringValue,
    rotation: SpringValue,
}

#[derive(Debug, Clone, Copy)]
struct GlowAnimator {
    x: SpringValue,
    y: SpringValue,
    scale: SpringValue,
}

#[derive(Debug, Clone, Copy)]
struct Pulse {
    scale: Tween,
    opacity: Tween,
}

impl Pulse {
    fn spawn(config: &CursorConfig) -> Self {
        Self {
            scale: Tween::new(
                config.pulse_start_scale,
                config.pulse_end_scale,
                config.pulse_duration_ms,
                Easing::EaseOut,
            ),
            opacity: Tween::new(1.0, 0.0, config.pulse_duration_ms, Easing::EaseOut),
        }
    }

    fn advance(&mut self, dt_ms: f32) {
        self.scale.advance(dt_ms);
        self.opacity.advance(dt_ms);
    }

    fn is_finished(&self) -> bool {
        self.scale.is_finished() && self.opacity.is_finished()
    }
}

pub struct CursorRenderer {
    config: CursorConfig,
    target: Option<RenderTarget>,
    marker: MarkerAnimator,
    glow: GlowAnimator,
    pulse: Option<Pulse>,
}

impl CursorRenderer {
    /// A renderer at rest on the viewport origin in the idle posture.
    pub fn new(config: CursorConfig) -> Self {
        let anchor = config.anchor_offset;
        let glow_offset = config.glow_offset;

        let marker = MarkerAnimator {
            x: SpringValue::new(-anchor, RestThreshold::POSITION),
            y: SpringValue::new(-anchor, RestThreshold::POSITION),
            scale: SpringValue::new(config.marker_scale.idle, RestThreshold::GRANULAR),
            rotation: SpringValue::new(config.marker_rotation.idle, RestThreshold::POSITION),
        };
        let glow = GlowAnimator {
            x: SpringValue::new(-glow_offset, RestThreshold::POSITION),
            y: SpringValue::new(-glow_offset, RestThreshold::POSITION),
            scale: SpringValue::new(config.glow_scale.idle, RestThreshold::GRANULAR),
        };

        Self {
            config,
            target: None,
            marker,
            glow,
            pulse: None,
        }
    }

    /// Where the marker is heading (pointer minus anchor).
    pub fn marker_target(&self) -> XY<f32> {
        XY::new(self.marker.x.target(), self.marker.y.target())
    }

    pub fn has_pulse(&self) -> bool {
        self.pulse.is_some()
    }

    /// Springs at rest and no one-shot effect running.
    pub fn is_settled(&self) -> bool {
        let marker = &self.marker;
        let glow = &self.glow;
        self.pulse.is_none()
            && marker.x.is_settled()
            && marker.y.is_settled()
            && marker.scale.is_settled()
            && marker.rotation.is_settled()
            && glow.x.is_settled()
            && glow.y.is_settled()
            && glow.scale.is_settled()
    }

    /// Animate toward `target`. Returns false when nothing changed.
    pub fn retarget(&mut self, target: RenderTarget) -> bool {
        if self.target == Some(target) {
            return false;
        }

        self.set_spring_targets(&target);
        self.update_pulse(&target);
        self.target = Some(target);
        true
    }

    /// Like `retarget`, but the position channels land immediately. Used for
    /// the first observed sample so the marker does not fly in from the
    /// corner of the viewport.
    pub fn place(&mut self, target: RenderTarget) {
        self.retarget(target);

        let marker_pos = target.position.minus(self.config.anchor_offset);
        let glow_pos = target.position.minus(self.config.glow_offset);
        self.marker.x.jump_to(marker_pos.x);
        self.marker.y.jump_to(marker_pos.y);
        self.glow.x.jump_to(glow_pos.x);
        self.glow.y.jump_to(glow_pos.y);
    }

    /// Run the springs and one-shot effects forward and return the frame.
    pub fn advance(&mut self, dt_ms: f32) -> CursorFrame {
        let dt_ms = dt_ms.max(0.0);
        let marker_spring = self.config.marker_spring;
        let glow_spring = self.config.glow_spring;

        self.marker.x.run(&marker_spring, dt_ms);
        self.marker.y.run(&marker_spring, dt_ms);
        self.marker.scale.run(&marker_spring, dt_ms);
        self.marker.rotation.run(&marker_spring, dt_ms);

        self.glow.x.run(&glow_spring, dt_ms);
        self.glow.y.run(&glow_spring, dt_ms);
        self.glow.scale.run(&glow_spring, dt_ms);

        if let Some(pulse) = self.pulse.as_mut() {
            pulse.advance(dt_ms);
            if pulse.is_finished() {
                log::trace!("[CURSOR] Press pulse finished");
                self.pulse = None;
            }
        }

        self.frame()
    }

    /// Current frame without advancing time.
    pub fn frame(&self) -> CursorFrame {
        let (mode, dark, position) = match self.target {
            Some(target) => (target.mode, target.theme.is_dark(), target.position),
            None => (DisplayMode::default(), false, PointerSample::default()),
        };

        let marker = MarkerFrame {
            position: XY::new(self.marker.x.value(), self.marker.y.value()),
            scale: self.marker.scale.value(),
            rotation_deg: self.marker.rotation.value(),
            mode,
            shadow: dark,
        };

        let glow = dark.then(|| GlowFrame {
            position: XY::new(self.glow.x.value(), self.glow.y.value()),
            scale: self.glow.scale.value(),
        });

        // The pulse tracks the raw pointer, not the spring.
        let pulse = self.pulse.map(|pulse| PulseFrame {
            position: position.minus(self.config.anchor_offset),
            scale: pulse.scale.value(),
            opacity: pulse.opacity.value(),
        });

        CursorFrame {
            marker,
            glow,
            pulse,
        }
    }

    fn set_spring_targets(&mut self, target: &RenderTarget) {
        let config = &self.config;
        let marker_posture = Posture::from_flags(target.flags);
        let glow_posture = Posture::glow_from_flags(target.flags);

        let marker_pos = target.position.minus(config.anchor_offset);
        self.marker.x.set_target(marker_pos.x);
        self.marker.y.set_target(marker_pos.y);
        self.marker
            .scale
            .set_target(config.marker_scale.pick(marker_posture));
        self.marker
            .rotation
            .set_target(config.marker_rotation.pick(marker_posture));

        let glow_pos = target.position.minus(config.glow_offset);
        self.glow.x.set_target(glow_pos.x);
        self.glow.y.set_target(glow_pos.y);
        self.glow.scale.set_target(config.glow_scale.pick(glow_posture));
    }

    fn update_pulse(&mut self, target: &RenderTarget) {
        let was_pressed = self.target.is_some_and(|t| t.flags.is_pressed);
        let pressed = target.flags.is_pressed;

        if !pressed || !target.theme.is_dark() {
            self.pulse = None;
        } else if !was_pressed {
            log::trace!("[CURSOR] Press pulse spawned");
            self.pulse = Some(Pulse::spawn(&self.config));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTLE_MS: f32 = 3000.0;

    fn target(x: f32, y: f32, pressed: bool, hovering: bool, theme: Theme) -> RenderTarget {
        RenderTarget::new(
            PointerSample::new(x, y),
            InteractionFlags {
                is_pointer_target: hovering,
                is_pressed: pressed,
            },
            theme,
        )
    }

    #[test]
    fn test_settles_on_pointer_minus_anchor() {
        let mut renderer = CursorRenderer::new(CursorConfig::default());
        renderer.retarget(target(100.0, 100.0, false, false, Theme::Light));

        let first = renderer.advance(16.0);
        assert!(first.marker.position.x < 82.0);

        let settled = renderer.advance(SETTLE_MS);
        assert_eq!(settled.marker.position, XY::new(82.0, 82.0));
        assert_eq!(settled.marker.mode, DisplayMode::Down);
        assert!(renderer.is_settled());
    }

    #[test]
    fn test_place_skips_fly_in() {
        let mut renderer = CursorRenderer::new(CursorConfig::default());
        renderer.place(target(300.0, 200.0, false, false, Theme::Light));

        let frame = renderer.frame();
        assert_eq!(frame.marker.position, XY::new(282.0, 182.0));
    }

    #[test]
    fn test_three_postures() {
        let config = CursorConfig::default();
        let cases = [
            (true, false, 1.06, -6.0),
            (false, true, 1.0, 2.0),
            (false, false, 0.96, 0.0),
        ];

        for (pressed, hovering, scale, rotation) in cases {
            let mut renderer = CursorRenderer::new(config.clone());
            renderer.place(target(10.0, 10.0, pressed, hovering, Theme::Light));
            let frame = renderer.advance(SETTLE_MS);
            assert_eq!(frame.marker.scale, scale);
            assert_eq!(frame.marker.rotation_deg, rotation);
        }
    }

    #[test]
    fn test_hover_keeps_mode_down() {
        let mut renderer = CursorRenderer::new(CursorConfig::default());
        renderer.place(target(10.0, 10.0, false, true, Theme::Light));
        assert_eq!(renderer.frame().marker.mode, DisplayMode::Down);
    }

    #[test]
    fn test_retarget_is_idempotent() {
        let mut renderer = CursorRenderer::new(CursorConfig::default());
        let t = target(50.0, 60.0, false, false, Theme::Dark);

        assert!(renderer.retarget(t));
        renderer.advance(40.0);
        let before = renderer.frame();

        assert!(!renderer.retarget(t));
        assert_eq!(renderer.frame(), before);
    }

    #[test]
    fn test_glow_only_in_dark_mode() {
        let mut renderer = CursorRenderer::new(CursorConfig::default());
        renderer.place(target(200.0, 200.0, false, false, Theme::Light));
        assert!(renderer.frame().glow.is_none());
        assert!(!renderer.frame().marker.shadow);

        renderer.retarget(target(200.0, 200.0, false, false, Theme::Dark));
        let frame = renderer.advance(SETTLE_MS);
        let glow = frame.glow.unwrap();
        assert_eq!(glow.position, XY::new(80.0, 80.0));
        assert_eq!(glow.scale, 1.0);
        assert!(frame.marker.shadow);
    }

    #[test]
    fn test_glow_hover_beats_press() {
        let mut renderer = CursorRenderer::new(CursorConfig::default());
        renderer.place(target(0.0, 0.0, true, true, Theme::Dark));
        let frame = renderer.advance(SETTLE_MS);
        assert_eq!(frame.glow.unwrap().scale, 1.15);
        assert_eq!(frame.marker.scale, 1.06);
    }

    #[test]
    fn test_pulse_lifecycle() {
        let mut renderer = CursorRenderer::new(CursorConfig::default());
        renderer.place(target(40.0, 40.0, false, false, Theme::Dark));
        renderer.retarget(target(40.0, 40.0, true, false, Theme::Dark));

        let pulse = renderer.frame().pulse.unwrap();
        assert_eq!(pulse.scale, 0.6);
        assert_eq!(pulse.opacity, 1.0);
        assert_eq!(pulse.position, XY::new(22.0, 22.0));

        let mid = renderer.advance(175.0).pulse.unwrap();
        assert!(mid.scale > 0.6 && mid.scale < 1.6);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);

        assert!(renderer.advance(200.0).pulse.is_none());
        assert!(!renderer.has_pulse());
    }

    #[test]
    fn test_pulse_cleared_on_release() {
        let mut renderer = CursorRenderer::new(CursorConfig::default());
        renderer.place(target(40.0, 40.0, true, false, Theme::Dark));
        assert!(renderer.has_pulse());

        renderer.retarget(target(40.0, 40.0, false, false, Theme::Dark));
        assert!(!renderer.has_pulse());
    }

    #[test]
    fn test_no_pulse_in_light_mode() {
        let mut renderer = CursorRenderer::new(CursorConfig::default());
        renderer.place(target(40.0, 40.0, false, false, Theme::Light));
        renderer.retarget(target(40.0, 40.0, true, false, Theme::Light));
        assert!(renderer.frame().pulse.is_none());
    }

    #[test]
    fn test_moving_while_pressed_keeps_single_pulse() {
        let mut renderer = CursorRenderer::new(CursorConfig::default());
        renderer.place(target(40.0, 40.0, true, false, Theme::Dark));
        renderer.advance(100.0);
        let before = renderer.frame().pulse.unwrap().scale;

        renderer.retarget(target(60.0, 60.0, true, false, Theme::Dark));
        let after = renderer.frame().pulse.unwrap();
        assert_eq!(after.scale, before);
        assert_eq!(after.position, XY::new(42.0, 42.0));
    }
}
