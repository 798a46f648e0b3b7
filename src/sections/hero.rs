//! Hero banner markup.

use std::fmt::Write as _;

use super::markup::escape_html;
use super::{REVEAL_ATTR, TYPED_ID};
use crate::content::PersonalInfo;

/// Anchor of the contact section the primary call to action jumps to.
pub const CONTACT_ANCHOR: &str = "#contact";

/// Class of the caret trailing the typed title.
pub const CARET_CLASS: &str = "typed-cursor";

/// Id of the `<style>` element carrying [`CARET_STYLESHEET`].
pub const CARET_STYLE_ID: &str = "folio-caret-style";

/// Caret blink: fully on, off at the half period, 0.7 s per cycle.
pub const CARET_STYLESHEET: &str = concat!(
    ".typed-cursor{opacity:1;animation:folio-caret-blink 0.7s infinite}",
    "@keyframes folio-caret-blink{50%{opacity:0}}",
);

pub fn render_hero(info: &PersonalInfo) -> String {
    let name = escape_html(&info.name);
    let mut html = String::with_capacity(2048);

    html.push_str(r#"<section id="home" class="hero">"#);

    let _ = write!(
        html,
        r#"<video class="hero-video" autoplay muted loop playsinline aria-hidden="true"><source src="{}" type="{}">{} background</video>"#,
        escape_html(&info.hero_video.href),
        escape_html(&info.hero_video.mime),
        name
    );

    // Hero reveals on mount, not on scroll
    let _ = write!(html, r#"<div class="hero-content" {REVEAL_ATTR}="mount">"#);
    let _ = write!(
        html,
        r#"<h1>Hi, I'm <span class="accent">{name}</span></h1>"#
    );
    let _ = write!(
        html,
        r#"<h2><span id="{TYPED_ID}" class="typed">{}</span><span class="{CARET_CLASS}" aria-hidden="true">|</span></h2>"#,
        escape_html(&info.title)
    );
    let _ = write!(
        html,
        r#"<p class="hero-description">{}</p>"#,
        escape_html(&info.description)
    );

    html.push_str(r#"<div class="hero-actions">"#);
    let _ = write!(
        html,
        r#"<a class="btn btn-primary" href="{CONTACT_ANCHOR}">Contact Me</a>"#
    );
    let _ = write!(
        html,
        r#"<a class="btn btn-outline" href="{}" target="_blank" rel="noopener noreferrer">View Resume</a>"#,
        escape_html(&info.resume.href)
    );
    html.push_str("</div></div></section>");

    html
}
