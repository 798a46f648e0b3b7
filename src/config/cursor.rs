//! Cursor overlay configuration.
//!
//! Spring parameters use the stiffness/damping/mass convention of web
//! animation engines, so values can be lifted from a stylesheet or motion
//! preset unchanged.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cursor::Posture;

/// Spring-mass-damper parameters.
///
/// Fields left out of a JSON document fall back to [`SpringConfig::MARKER`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export, export_to = "../wasm/site/types/")]
pub struct SpringConfig {
    /// Spring stiffness (force per unit of displacement).
    pub stiffness: f32,
    /// Damping coefficient.
    pub damping: f32,
    /// Object mass.
    pub mass: f32,
}

impl SpringConfig {
    /// Spring driving the bulldozer marker.
    pub const MARKER: SpringConfig = SpringConfig {
        stiffness: 170.0,
        damping: 18.0,
        mass: 0.12,
    };

    /// Softer spring driving the dark-mode glow.
    pub const GLOW: SpringConfig = SpringConfig {
        stiffness: 150.0,
        damping: 18.0,
        mass: 0.12,
    };

    /// Lowest accepted damping ratio. Anything below keeps ringing long
    /// after the pointer stops.
    pub const MIN_DAMPING_RATIO: f32 = 0.1;

    /// Damping at which the spring returns without overshoot.
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    pub fn validate(&mut self) {
        self.stiffness = self.stiffness.clamp(1.0, 2000.0);
        self.mass = self.mass.clamp(0.01, 50.0);
        let floor = Self::MIN_DAMPING_RATIO * self.critical_damping();
        self.damping = self.damping.clamp(floor, 500.0);
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::MARKER
    }
}

/// One value per renderer posture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../wasm/site/types/")]
pub struct PostureValues {
    pub pressed: f32,
    pub hovering: f32,
    pub idle: f32,
}

impl PostureValues {
    pub const fn new(pressed: f32, hovering: f32, idle: f32) -> Self {
        Self {
            pressed,
            hovering,
            idle,
        }
    }

    pub fn pick(&self, posture: Posture) -> f32 {
        match posture {
            Posture::Pressed => self.pressed,
            Posture::Hovering => self.hovering,
            Posture::Idle => self.idle,
        }
    }
}

/// Centralized cursor overlay configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export, export_to = "../wasm/site/types/")]
pub struct CursorConfig {
    /// Spring for the marker position, scale and rotation.
    pub marker_spring: SpringConfig,

    /// Spring for the glow position and scale.
    pub glow_spring: SpringConfig,

    /// Offset subtracted from the pointer to center the marker (px).
    pub anchor_offset: f32,

    /// Offset subtracted from the pointer to center the glow (px).
    pub glow_offset: f32,

    /// Rendered icon edge length (px).
    pub icon_size: u32,

    /// Marker scale per posture.
    pub marker_scale: PostureValues,

    /// Marker rotation per posture (degrees).
    pub marker_rotation: PostureValues,

    /// Glow scale per posture. Hover wins over press for the glow.
    pub glow_scale: PostureValues,

    /// Press pulse lifetime (ms).
    pub pulse_duration_ms: f32,

    /// Press pulse scale at spawn.
    pub pulse_start_scale: f32,

    /// Press pulse scale when it disposes.
    pub pulse_end_scale: f32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            marker_spring: SpringConfig::MARKER,
            glow_spring: SpringConfig::GLOW,
            anchor_offset: 18.0,
            glow_offset: 120.0,
            icon_size: 36,
            marker_scale: PostureValues::new(1.06, 1.0, 0.96),
            marker_rotation: PostureValues::new(-6.0, 2.0, 0.0),
            glow_scale: PostureValues::new(0.9, 1.15, 1.0),
            pulse_duration_ms: 350.0,
            pulse_start_scale: 0.6,
            pulse_end_scale: 1.6,
        }
    }
}

impl CursorConfig {
    /// Validate and clamp settings to acceptable ranges.
    pub fn validate(&mut self) {
        self.marker_spring.validate();
        self.glow_spring.validate();
        self.anchor_offset = self.anchor_offset.clamp(0.0, 256.0);
        self.glow_offset = self.glow_offset.clamp(0.0, 1024.0);
        self.icon_size = self.icon_size.clamp(8, 256);
        self.pulse_duration_ms = self.pulse_duration_ms.clamp(16.0, 5000.0);
        self.pulse_start_scale = self.pulse_start_scale.max(0.0);
        self.pulse_end_scale = self.pulse_end_scale.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CursorConfig::default();
        assert_eq!(config.anchor_offset, 18.0);
        assert_eq!(config.glow_offset, 120.0);
        assert_eq!(config.marker_spring, SpringConfig::MARKER);
        assert_eq!(config.marker_scale.pick(Posture::Idle), 0.96);
        assert_eq!(config.marker_rotation.pick(Posture::Pressed), -6.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: CursorConfig =
            serde_json::from_str(r#"{ "anchorOffset": 24, "pulseDurationMs": 500 }"#).unwrap();
        assert_eq!(config.anchor_offset, 24.0);
        assert_eq!(config.pulse_duration_ms, 500.0);
        assert_eq!(config.glow_spring, SpringConfig::GLOW);
    }

    #[test]
    fn test_validate_clamps() {
        let mut config = CursorConfig {
            icon_size: 0,
            pulse_duration_ms: -1.0,
            marker_spring: SpringConfig {
                stiffness: 0.0,
                damping: -3.0,
                mass: 0.0,
            },
            ..Default::default()
        };
        config.validate();
        assert_eq!(config.icon_size, 8);
        assert_eq!(config.pulse_duration_ms, 16.0);
        assert_eq!(config.marker_spring.stiffness, 1.0);
        assert_eq!(config.marker_spring.mass, 0.01);
        // 0.1 of critical damping for k = 1, m = 0.01
        assert!((config.marker_spring.damping - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_validate_keeps_presets() {
        for preset in [SpringConfig::MARKER, SpringConfig::GLOW] {
            let mut spring = preset;
            spring.validate();
            assert_eq!(spring, preset);
        }
    }

    #[test]
    fn test_validate_raises_undamped_spring() {
        let mut spring = SpringConfig {
            stiffness: 2000.0,
            damping: 0.0,
            mass: 50.0,
        };
        spring.validate();
        assert!(spring.damping > 0.0);
        assert!(spring.damping <= 500.0);
        assert!((spring.damping / spring.critical_damping() - 0.1).abs() < 1e-4);
    }

    #[test]
    fn test_partial_spring_json() {
        let spring: SpringConfig = serde_json::from_str(r#"{ "damping": 20 }"#).unwrap();
        assert_eq!(spring.damping, 20.0);
        assert_eq!(spring.stiffness, SpringConfig::MARKER.stiffness);
        assert_eq!(spring.mass, SpringConfig::MARKER.mass);
    }
}
