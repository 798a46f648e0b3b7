//! Cursor rendering: springs, tweens, the bulldozer glyph and overlay styles.

pub mod cursor;
pub mod icon;
pub mod spring;
pub mod style;
pub mod tween;

pub use cursor::{CursorFrame, CursorRenderer, GlowFrame, MarkerFrame, PulseFrame, RenderTarget};
#[cfg(feature = "export")]
pub use icon::{rasterize_icon, RenderedIcon};
pub use icon::{bulldozer_svg, BulldozerGeometry};
pub use spring::{RestThreshold, SpringValue};
pub use tween::{Easing, Tween};
