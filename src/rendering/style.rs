//! Inline styles for the cursor overlay elements.
//!
//! The overlay is three fixed-position layers driven purely by CSS
//! transforms. Class names are shared with the page stylesheet so the
//! marker and glow can be hidden on narrow viewports.

use std::fmt::Write as _;

use super::cursor::{GlowFrame, MarkerFrame, PulseFrame};

/// Class on every overlay layer that hides below the `sm` breakpoint.
pub const RESPONSIVE_CLASS: &str = "folio-cursor";

/// Viewport width (px) from which the overlay is shown.
pub const SM_BREAKPOINT_PX: u32 = 640;

/// Stylesheet injected once per page.
pub const OVERLAY_STYLESHEET: &str = concat!(
    ".folio-cursor{display:none}",
    "@media (min-width:640px){.folio-cursor{display:block}}",
    "html.folio-cursor-active,html.folio-cursor-active *{cursor:none}"
);

/// Class toggled on the document element while the overlay is mounted.
pub const ACTIVE_CLASS: &str = "folio-cursor-active";

const LAYER_BASE: &str = "position:fixed;top:0;left:0;pointer-events:none;will-change:transform;";

pub const MARKER_STYLE: &str =
    "position:fixed;top:0;left:0;pointer-events:none;will-change:transform;z-index:50;mix-blend-mode:difference;";

pub const GLOW_STYLE: &str =
    "position:fixed;top:0;left:0;pointer-events:none;will-change:transform;z-index:40;";

pub const PULSE_STYLE: &str =
    "position:fixed;top:0;left:0;pointer-events:none;will-change:transform;z-index:50;";

/// 240px soft radial spotlight.
pub const GLOW_INNER_STYLE: &str = concat!(
    "width:240px;height:240px;border-radius:9999px;",
    "background:radial-gradient(circle, rgba(255,255,255,0.07) 0%, ",
    "rgba(255,255,255,0.03) 40%, transparent 72%);",
    "filter:blur(6px);"
);

pub const PULSE_INNER_STYLE: &str =
    "width:36px;height:36px;border-radius:9999px;background:rgba(255,255,255,0.25);filter:blur(16px);";

const MARKER_SHADOW: &str = "box-shadow:0 0 18px rgba(255,255,255,0.35);";

/// Wrapper around the glyph: rounded padding box, halo in dark mode.
pub fn marker_inner_style(shadow: bool) -> String {
    let mut style = String::from("border-radius:12px;padding:4px;line-height:0;");
    if shadow {
        style.push_str(MARKER_SHADOW);
    }
    style
}

pub fn marker_transform(frame: &MarkerFrame) -> String {
    let mut css = String::with_capacity(96);
    let _ = write!(
        css,
        "translate3d({}px, {}px, 0) scale({}) rotate({}deg)",
        round2(frame.position.x),
        round2(frame.position.y),
        round3(frame.scale),
        round2(frame.rotation_deg)
    );
    css
}

pub fn glow_transform(frame: &GlowFrame) -> String {
    format!(
        "translate3d({}px, {}px, 0) scale({})",
        round2(frame.position.x),
        round2(frame.position.y),
        round3(frame.scale)
    )
}

/// Full inline style for the pulse layer (it animates opacity too).
pub fn pulse_style(frame: &PulseFrame) -> String {
    format!(
        "{}z-index:50;transform:translate3d({}px, {}px, 0) scale({});opacity:{};",
        LAYER_BASE,
        round2(frame.position.x),
        round2(frame.position.y),
        round3(frame.scale),
        round3(frame.opacity)
    )
}

/// Native cursor fallback for pages without script, using the exported
/// sprite. The hotspot sits on the glyph center.
pub fn native_cursor_css(sprite: &str, hotspot: u32) -> String {
    format!(
        "html,html *{{cursor:url({sprite}) {hotspot} {hotspot}, auto}}a,button,[role=button]{{cursor:url({sprite}) {hotspot} {hotspot}, pointer}}"
    )
}

fn round2(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

fn round3(v: f32) -> f32 {
    (v * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{DisplayMode, XY};

    #[test]
    fn test_marker_transform() {
        let frame = MarkerFrame {
            position: XY::new(82.0, 31.504),
            scale: 0.96,
            rotation_deg: -6.0,
            mode: DisplayMode::Up,
            shadow: false,
        };
        assert_eq!(
            marker_transform(&frame),
            "translate3d(82px, 31.5px, 0) scale(0.96) rotate(-6deg)"
        );
    }

    #[test]
    fn test_marker_shadow_only_when_requested() {
        assert!(marker_inner_style(true).contains("box-shadow"));
        assert!(!marker_inner_style(false).contains("box-shadow"));
    }

    #[test]
    fn test_pulse_style_carries_opacity() {
        let frame = PulseFrame {
            position: XY::new(10.0, 20.0),
            scale: 1.6,
            opacity: 0.0,
        };
        let style = pulse_style(&frame);
        assert!(style.starts_with("position:fixed;"));
        assert!(style.contains("scale(1.6)"));
        assert!(style.ends_with("opacity:0;"));
    }

    #[test]
    fn test_stylesheet_breakpoint() {
        assert!(OVERLAY_STYLESHEET.contains(&format!("min-width:{}px", SM_BREAKPOINT_PX)));
        assert!(OVERLAY_STYLESHEET.contains(RESPONSIVE_CLASS));
        assert!(OVERLAY_STYLESHEET.contains(ACTIVE_CLASS));
    }

    #[test]
    fn test_layer_styles_share_base() {
        for style in [MARKER_STYLE, GLOW_STYLE, PULSE_STYLE] {
            assert!(style.starts_with(LAYER_BASE));
        }
    }

    #[test]
    fn test_native_cursor_css() {
        let css = native_cursor_css("cursor-down.png", 18);
        assert!(css.starts_with("html,html *{cursor:url(cursor-down.png) 18 18, auto}"));
    }
}
