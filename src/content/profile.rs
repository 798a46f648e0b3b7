//! Personal info and asset references shown in the hero banner.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A static file shipped next to the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../wasm/site/types/")]
pub struct AssetRef {
    /// Path relative to the page.
    pub href: String,
    /// MIME type, used for `<source type>` and download hints.
    pub mime: String,
}

impl AssetRef {
    pub fn new(href: &str, mime: &str) -> Self {
        Self {
            href: href.to_string(),
            mime: mime.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../wasm/site/types/")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub description: String,
    pub resume: AssetRef,
    pub hero_video: AssetRef,
}

/// Roles cycled by the hero typewriter after the main title.
pub const HEADLINE_ROLES: [&str; 3] = [
    "Graduate Student at ASU",
    "BIM and Project Coordination",
    "Aspiring Construction Technologist",
];

pub fn personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "Jordan Patel".to_string(),
        title: "Construction Management Professional".to_string(),
        description: "I bridge field operations and digital delivery: coordinating \
                      BIM models, schedules and trade packages so projects are built \
                      right the first time."
            .to_string(),
        resume: AssetRef::new("assets/resume.pdf", "application/pdf"),
        hero_video: AssetRef::new("assets/hero.mp4", "video/mp4"),
    }
}

/// Strings typed in the hero headline: the title first, then the roles.
pub fn headline_roles(info: &PersonalInfo) -> Vec<String> {
    std::iter::once(info.title.clone())
        .chain(HEADLINE_ROLES.iter().map(|s| s.to_string()))
        .collect()
}
