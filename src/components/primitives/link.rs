//! Link Component
//!
//! Wraps arbitrary child content in a design system anchor. The href is taken
//! verbatim; an empty string still produces a valid anchor.

use crate::components::attrs::Attributes;
use crate::components::composite::identifier::slots::{SlotHost, SlotName};
use crate::html::{el, Node};
use crate::theme;

/// A styled link component
#[derive(Debug, Clone, Default)]
pub struct Link {
    href: String,
    children: Vec<Node>,
}

impl Link {
    /// Tag name the component registers under
    pub const TAG: &'static str = "usa-link";

    /// Create a link with the given destination
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            children: Vec::new(),
        }
    }

    /// Append child content
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Build a link from a host attribute map and the anonymous slot
    pub fn from_attrs(attrs: &Attributes, slots: &dyn SlotHost) -> Self {
        let mut link = Link::new(attrs.get("href").unwrap_or_default());
        for node in slots.query_all(SlotName::Default) {
            link = link.child(node.to_element());
        }
        link
    }

    /// Render the anchor markup
    pub fn render(&self) -> String {
        el("a")
            .class("usa-link")
            .attr("href", &self.href)
            .children(self.children.iter().cloned())
            .to_html()
    }

    /// The themeable rule block for link color states.
    ///
    /// Every state reads a CSS custom property with the design system default
    /// as fallback, so hosts retheme without touching the component.
    pub fn stylesheet() -> String {
        theme::link_stylesheet()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::identifier::slots::{SlotMap, SlotNode};

    #[test]
    fn test_renders_single_anchor_with_href_and_text() {
        let markup = Link::new("https://example.gov").child("Example").render();
        assert_eq!(
            markup,
            "<a class=\"usa-link\" href=\"https://example.gov\">Example</a>"
        );
        assert_eq!(markup.matches("<a ").count(), 1);
    }

    #[test]
    fn test_empty_href_is_accepted() {
        let markup = Link::new("").child("Home").render();
        assert_eq!(markup, "<a class=\"usa-link\" href=\"\">Home</a>");
    }

    #[test]
    fn test_child_text_is_escaped() {
        let markup = Link::new("/a&b").child("Fish & Wildlife").render();
        assert!(markup.contains("href=\"/a&amp;b\""));
        assert!(markup.contains("Fish &amp; Wildlife"));
    }

    #[test]
    fn test_from_attrs_uses_anonymous_slot() {
        let attrs = Attributes::new().set("href", "https://example.gov");
        let slots = SlotMap::new().with(
            SlotName::Default,
            SlotNode::new("span").text("Example"),
        );
        let markup = Link::from_attrs(&attrs, &slots).render();
        assert_eq!(
            markup,
            "<a class=\"usa-link\" href=\"https://example.gov\"><span>Example</span></a>"
        );
    }

    #[test]
    fn test_stylesheet_carries_theme_variables() {
        let css = Link::stylesheet();
        assert!(css.contains("var(--theme-link-color, #005ea2)"));
        assert!(css.contains("var(--theme-link-visited-color, #54278f)"));
        assert!(css.contains("var(--theme-focus-color, #2491ff)"));
    }
}
