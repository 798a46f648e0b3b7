//! Section animation configuration (typewriter headline, reveal-on-scroll).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Typewriter timings. Defaults match the classic Typed.js setup used by the
/// hero headline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export, export_to = "../wasm/site/types/")]
pub struct TypewriterConfig {
    /// Delay per typed character (ms).
    pub type_speed_ms: f32,
    /// Delay per erased character (ms).
    pub back_speed_ms: f32,
    /// Pause on a fully typed string before erasing (ms).
    pub back_delay_ms: f32,
    /// Pause before the first character (ms).
    pub start_delay_ms: f32,
    /// Start over after the last string.
    pub loop_strings: bool,
    /// Only erase down to the prefix shared with the next string.
    pub smart_backspace: bool,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_speed_ms: 50.0,
            back_speed_ms: 25.0,
            back_delay_ms: 1500.0,
            start_delay_ms: 0.0,
            loop_strings: true,
            smart_backspace: true,
        }
    }
}

impl TypewriterConfig {
    /// Every timed step must cost at least 1ms so a tick always terminates.
    pub fn validate(&mut self) {
        self.type_speed_ms = self.type_speed_ms.clamp(1.0, 10_000.0);
        self.back_speed_ms = self.back_speed_ms.clamp(1.0, 10_000.0);
        self.back_delay_ms = self.back_delay_ms.clamp(1.0, 60_000.0);
        self.start_delay_ms = self.start_delay_ms.clamp(0.0, 60_000.0);
    }
}

/// Fade-up entrance used by section headings and cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export, export_to = "../wasm/site/types/")]
pub struct RevealConfig {
    /// Viewport root margin (px). Negative shrinks the trigger area.
    pub root_margin_px: f32,
    /// Vertical offset the element starts from (px).
    pub offset_y: f32,
    /// Fade duration (ms).
    pub duration_ms: f32,
    /// Stay revealed after leaving the viewport.
    pub once: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            root_margin_px: -100.0,
            offset_y: 20.0,
            duration_ms: 600.0,
            once: true,
        }
    }
}

impl RevealConfig {
    pub fn validate(&mut self) {
        self.duration_ms = self.duration_ms.clamp(1.0, 10_000.0);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export, export_to = "../wasm/site/types/")]
pub struct SectionConfig {
    pub typewriter: TypewriterConfig,
    pub reveal: RevealConfig,
}

impl SectionConfig {
    pub fn validate(&mut self) {
        self.typewriter.validate();
        self.reveal.validate();
    }
}
