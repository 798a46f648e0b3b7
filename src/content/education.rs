//! Education history records.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../wasm/site/types/")]
pub struct EducationItem {
    pub id: u32,
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub period: String,
    pub description: String,
    /// Shown under "Grades".
    pub achievements: Vec<String>,
    /// Shown as "Relevant Coursework" chips when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub courses: Option<Vec<String>>,
}

impl EducationItem {
    /// Courses to render, if any. An empty list counts as none.
    pub fn coursework(&self) -> Option<&[String]> {
        self.courses.as_deref().filter(|c| !c.is_empty())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Most recent first.
pub fn education_items() -> Vec<EducationItem> {
    vec![
        EducationItem {
            id: 1,
            degree: "M.S. Construction Management and Technology".to_string(),
            institution: "Arizona State University".to_string(),
            location: "Tempe, AZ".to_string(),
            period: "2024 - 2026".to_string(),
            description: "Graduate study in virtual design and construction, project \
                          controls and construction technology adoption."
                .to_string(),
            achievements: strings(&["GPA: 3.9 / 4.0"]),
            courses: Some(strings(&[
                "Building Information Modeling",
                "Construction Project Controls",
                "Lean Construction",
                "Construction Technology Innovation",
            ])),
        },
        EducationItem {
            id: 2,
            degree: "B.Tech. Civil Engineering".to_string(),
            institution: "National Institute of Technology".to_string(),
            location: "Surat, India".to_string(),
            period: "2018 - 2022".to_string(),
            description: "Structural and construction engineering foundations with a \
                          capstone on schedule-integrated 4D modeling."
                .to_string(),
            achievements: strings(&["CGPA: 8.7 / 10", "Department rank 5"]),
            courses: None,
        },
    ]
}
