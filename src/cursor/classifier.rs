//! Target classification: does the element under the pointer look clickable?
//!
//! Two independent signals are OR-ed:
//! 1. structural: the node or an ancestor matches an interactive selector
//! 2. style: the node's computed `cursor` is `pointer`
//!
//! Custom widgets often only set `cursor: pointer`, and semantic controls can
//! have their cursor overridden, so either signal alone misses real targets.

use std::fmt;

/// Computed `cursor` value that marks a clickable element.
pub const POINTER_CURSOR: &str = "pointer";

/// Attribute a page uses to opt an element into pointer feedback.
pub const CURSOR_MARKER_ATTR: &str = "data-cursor";

/// Host element handle the classifier can inspect.
pub trait TargetNode: Sized {
    /// Element tag name, in any case.
    fn tag_name(&self) -> String;

    fn attribute(&self, name: &str) -> Option<String>;

    fn parent(&self) -> Option<Self>;

    /// Resolved `cursor` style. `None` when the host cannot resolve styles.
    fn computed_cursor(&self) -> Option<String>;
}

/// Element kinds treated as clickable for cursor feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractiveSelector {
    /// `a`
    Link,
    /// `button`
    Button,
    /// `[role="button"]`
    RoleButton,
    /// `[data-cursor="pointer"]`
    CursorMarker,
}

impl InteractiveSelector {
    pub const ALL: [InteractiveSelector; 4] = [
        InteractiveSelector::Link,
        InteractiveSelector::Button,
        InteractiveSelector::RoleButton,
        InteractiveSelector::CursorMarker,
    ];

    pub fn css(self) -> &'static str {
        match self {
            InteractiveSelector::Link => "a",
            InteractiveSelector::Button => "button",
            InteractiveSelector::RoleButton => "[role=\"button\"]",
            InteractiveSelector::CursorMarker => "[data-cursor=\"pointer\"]",
        }
    }

    pub fn matches<N: TargetNode>(self, node: &N) -> bool {
        match self {
            InteractiveSelector::Link => node.tag_name().eq_ignore_ascii_case("a"),
            InteractiveSelector::Button => node.tag_name().eq_ignore_ascii_case("button"),
            InteractiveSelector::RoleButton => node.attribute("role").as_deref() == Some("button"),
            InteractiveSelector::CursorMarker => {
                node.attribute(CURSOR_MARKER_ATTR).as_deref() == Some(POINTER_CURSOR)
            },
        }
    }
}

impl fmt::Display for InteractiveSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css())
    }
}

/// Both signals, kept apart for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    /// Selector matched on the node or an ancestor, if any.
    pub structural: Option<InteractiveSelector>,
    /// Computed cursor of the node itself is `pointer`.
    pub style: bool,
}

impl Classification {
    pub fn is_pointer_target(&self) -> bool {
        self.structural.is_some() || self.style
    }
}

/// Walk from `node` up through its ancestors and return the first
/// interactive selector that matches.
pub fn closest_interactive<N: TargetNode + Clone>(node: &N) -> Option<InteractiveSelector> {
    let mut current = Some(node.clone());
    while let Some(candidate) = current {
        if let Some(selector) = InteractiveSelector::ALL
            .into_iter()
            .find(|s| s.matches(&candidate))
        {
            return Some(selector);
        }
        current = candidate.parent();
    }
    None
}

pub fn has_pointer_style<N: TargetNode>(node: &N) -> bool {
    node.computed_cursor()
        .is_some_and(|cursor| cursor.trim().eq_ignore_ascii_case(POINTER_CURSOR))
}

pub fn classify<N: TargetNode + Clone>(node: &N) -> Classification {
    Classification {
        structural: closest_interactive(node),
        style: has_pointer_style(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::testing::TestNode;

    #[test]
    fn test_link_matches_regardless_of_style() {
        let link = TestNode::new("A").cursor("text");
        let result = classify(&link);
        assert_eq!(result.structural, Some(InteractiveSelector::Link));
        assert!(!result.style);
        assert!(result.is_pointer_target());
    }

    #[test]
    fn test_ancestor_button() {
        let button = TestNode::new("button");
        let icon = TestNode::new("svg").child_of(&button);
        let path = TestNode::new("path").child_of(&icon);

        assert_eq!(closest_interactive(&path), Some(InteractiveSelector::Button));
    }

    #[test]
    fn test_role_and_marker_attributes() {
        let role = TestNode::new("div").attr("role", "button");
        assert_eq!(closest_interactive(&role), Some(InteractiveSelector::RoleButton));

        let marker = TestNode::new("div").attr("data-cursor", "pointer");
        assert_eq!(
            closest_interactive(&marker),
            Some(InteractiveSelector::CursorMarker)
        );

        let other_marker = TestNode::new("div").attr("data-cursor", "grab");
        assert_eq!(closest_interactive(&other_marker), None);
    }

    #[test]
    fn test_style_only_target() {
        let card = TestNode::new("div").cursor("pointer");
        let result = classify(&card);
        assert_eq!(result.structural, None);
        assert!(result.style);
        assert!(result.is_pointer_target());
    }

    #[test]
    fn test_inherited_pointer_style() {
        let card = TestNode::new("div").cursor("pointer");
        let label = TestNode::new("span").child_of(&card);
        assert!(has_pointer_style(&label));
    }

    #[test]
    fn test_plain_text_is_not_a_target() {
        let section = TestNode::new("section");
        let paragraph = TestNode::new("p").child_of(&section).cursor("auto");
        assert!(!classify(&paragraph).is_pointer_target());
    }

    #[test]
    fn test_unresolved_style_is_false() {
        let node = TestNode::new("div");
        assert!(!has_pointer_style(&node));
    }
}
