//! Static page content. Read-only records, no persistence.

pub mod education;
pub mod profile;

use serde::Serialize;
use ts_rs::TS;

pub use education::{education_items, EducationItem};
pub use profile::{headline_roles, personal_info, AssetRef, PersonalInfo, HEADLINE_ROLES};

/// Everything the sections render, as one serializable bundle.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../wasm/site/types/")]
pub struct SiteContent {
    pub personal_info: PersonalInfo,
    pub headline: Vec<String>,
    pub education: Vec<EducationItem>,
}

impl SiteContent {
    pub fn load() -> Self {
        let personal_info = personal_info();
        let headline = headline_roles(&personal_info);
        Self {
            personal_info,
            headline,
            education: education_items(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_is_consistent() {
        let content = SiteContent::load();
        assert_eq!(content.headline[0], content.personal_info.title);
        assert!(!content.education.is_empty());
    }
}
