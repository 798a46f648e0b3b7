//! Education section markup.

use std::fmt::Write as _;

use super::markup::{escape_html, text_element};
use super::REVEAL_ATTR;
use crate::content::EducationItem;

pub const HEADING: &str = "Education";
pub const INTRO: &str = "My academic background and continuous learning journey.";

pub fn render_education(items: &[EducationItem]) -> String {
    let mut html = String::with_capacity(1024 + items.len() * 1024);

    html.push_str(r#"<section id="education" class="education">"#);
    let _ = write!(html, r#"<div class="section-heading" {REVEAL_ATTR}="view">"#);
    html.push_str(&text_element("h2", "", HEADING));
    html.push_str(&text_element("p", "section-intro", INTRO));
    html.push_str("</div>");

    html.push_str(r#"<div class="education-list">"#);
    for item in items {
        render_card(&mut html, item);
    }
    html.push_str("</div></section>");

    html
}

fn render_card(html: &mut String, item: &EducationItem) {
    let _ = write!(
        html,
        r#"<article class="education-card" data-id="{}" {REVEAL_ATTR}="view">"#,
        item.id
    );

    html.push_str(r#"<header class="card-header">"#);
    html.push_str(&text_element("h3", "degree", &item.degree));
    html.push_str(&text_element("span", "institution", &item.institution));
    html.push_str("</header>");

    html.push_str(r#"<div class="card-meta">"#);
    html.push_str(&text_element("span", "location", &item.location));
    html.push_str(&text_element("span", "period", &item.period));
    html.push_str("</div>");

    html.push_str(&text_element("p", "card-description", &item.description));

    html.push_str(r#"<div class="achievements">"#);
    html.push_str(&text_element("h4", "", "Grades"));
    html.push_str("<ul>");
    for achievement in &item.achievements {
        let _ = write!(html, "<li>{}</li>", escape_html(achievement));
    }
    html.push_str("</ul></div>");

    if let Some(courses) = item.coursework() {
        html.push_str(r#"<div class="coursework">"#);
        html.push_str(&text_element("h4", "", "Relevant Coursework"));
        html.push_str(r#"<div class="chips">"#);
        for course in courses {
            html.push_str(&text_element("span", "chip", course));
        }
        html.push_str("</div></div>");
    }

    html.push_str("</article>");
}
