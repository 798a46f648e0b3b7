//! Page sections: hero banner and education history, plus the reveal and
//! typewriter animations they use.
//!
//! Markup is plain HTML strings. The browser host inserts it, then drives
//! `Reveal` for every `data-reveal` element and `Typewriter` on `#typed`.

pub mod education;
pub mod hero;
pub mod markup;
pub mod reveal;
pub mod typewriter;

use crate::content::SiteContent;

pub use education::render_education;
pub use hero::{render_hero, CARET_STYLESHEET, CARET_STYLE_ID};
pub use markup::escape_html;
pub use reveal::{in_view, ElementBounds, Reveal, RevealStyle};
pub use typewriter::{Typewriter, TypewriterPhase};

/// Element id of the typewriter target.
pub const TYPED_ID: &str = "typed";

/// Attribute marking a reveal block. `mount` reveals immediately, `view`
/// once the block scrolls into view.
pub const REVEAL_ATTR: &str = "data-reveal";

/// How a block decides to start its entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTrigger {
    Mount,
    View,
}

impl RevealTrigger {
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "mount" => Some(RevealTrigger::Mount),
            "view" => Some(RevealTrigger::View),
            _ => None,
        }
    }
}

/// Hero followed by education, in page order.
pub fn render_sections(content: &SiteContent) -> String {
    let mut html = render_hero(&content.personal_info);
    html.push_str(&render_education(&content.education));
    log::debug!(
        "[SECTIONS] Rendered hero and {} education entries",
        content.education.len()
    );
    html
}
