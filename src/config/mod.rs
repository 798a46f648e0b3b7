//! Site configuration.
//!
//! - `CursorConfig`: springs, offsets and posture tables for the overlay
//! - `SectionConfig`: typewriter and reveal timings
//!
//! Configs are plain values owned by whoever mounts the site. Hosts load them
//! from JSON (export tool) or a JS object (browser) and call `validate()`
//! before use.

pub mod cursor;
pub mod sections;

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::error::{FolioResult, PathContext};

pub use cursor::{CursorConfig, PostureValues, SpringConfig};
pub use sections::{RevealConfig, SectionConfig, TypewriterConfig};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export, export_to = "../wasm/site/types/")]
pub struct SiteConfig {
    pub cursor: CursorConfig,
    pub sections: SectionConfig,
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON document and clamp it.
    ///
    /// The document is laid over the defaults key by key, so a nested object
    /// that names one field keeps the defaults of its siblings.
    pub fn from_json(json: &str) -> FolioResult<Self> {
        let overrides: Value = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(SiteConfig::default())?;
        merge(&mut merged, overrides);

        let mut config: SiteConfig = serde_json::from_value(merged)?;
        config.validate();
        Ok(config)
    }

    pub fn load(path: &Path) -> FolioResult<Self> {
        let json = std::fs::read_to_string(path).for_path("read", path)?;
        let config = Self::from_json(&json)?;
        log::debug!("[CONFIG] Loaded {}", path.display());
        Ok(config)
    }

    pub fn validate(&mut self) {
        self.cursor.validate();
        self.sections.validate();
    }
}

fn merge(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    },
                }
            }
        },
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_from_json_validates() {
        let config =
            SiteConfig::from_json(r#"{ "sections": { "typewriter": { "typeSpeedMs": 0 } } }"#)
                .unwrap();
        assert_eq!(config.sections.typewriter.type_speed_ms, 1.0);
    }

    #[test]
    fn test_partial_nested_objects_keep_sibling_defaults() {
        let config = SiteConfig::from_json(
            r#"{ "cursor": {
                "markerSpring": { "damping": 20 },
                "glowSpring": { "mass": 0.2 },
                "markerRotation": { "hovering": 4 }
            } }"#,
        )
        .unwrap();
        let cursor = config.cursor;

        assert_eq!(cursor.marker_spring.damping, 20.0);
        assert_eq!(cursor.marker_spring.stiffness, 170.0);
        assert_eq!(cursor.marker_spring.mass, 0.12);

        assert_eq!(cursor.glow_spring.mass, 0.2);
        assert_eq!(cursor.glow_spring.stiffness, 150.0);

        assert_eq!(cursor.marker_rotation.hovering, 4.0);
        assert_eq!(cursor.marker_rotation.pressed, -6.0);
        assert_eq!(cursor.marker_rotation.idle, 0.0);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let err = SiteConfig::from_json(r#"{ "cursor": { "markerSpring": 3 } }"#).unwrap_err();
        assert!(matches!(err, FolioError::Json(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = SiteConfig::from_json("{ cursor: ").unwrap_err();
        assert!(matches!(err, FolioError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SiteConfig::load(Path::new("/nonexistent/folio.json")).unwrap_err();
        assert!(matches!(err, FolioError::File { action: "read", .. }));
        assert!(err.to_string().starts_with("Failed to read /nonexistent/folio.json"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.json");
        std::fs::write(&path, r#"{ "cursor": { "iconSize": 48 } }"#).unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.cursor.icon_size, 48);
    }
}
