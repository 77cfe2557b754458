//! Slots - Host Content Bindings
//!
//! The identifier never owns host markup. The host page hands slotted nodes to
//! the component through the read-only [`SlotHost`] capability; the component
//! queries by [`SlotName`] and borrows whatever it finds for the duration of a
//! single render.

use std::collections::HashMap;
use std::fmt;

use crate::html::Element;

/// Recognized slot names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotName {
    /// Site domain name
    Domain,
    /// Parent agency logo and url (may appear multiple times)
    Logo,
    /// Intro phrase override for the masthead disclaimer
    AgencyIntro,
    /// Primary parent agency
    AgencyPrimary,
    /// Secondary parent agency
    AgencySecondary,
    /// Conjunction phrase override joining the two agencies
    AgencyConjunction,
    /// Taxpayer disclaimer sentence override
    AgencyTaxpayer,
    /// Extra masthead disclaimer content (participates in presence checks)
    Disclaimer,
    /// Agency about page
    LinkAbout,
    /// Accessibility statement
    LinkAccessibility,
    /// Freedom of Information Act page
    LinkFoia,
    /// No FEAR Act page
    LinkFear,
    /// Office of the Inspector General page
    LinkOig,
    /// Performance reports page
    LinkPerformance,
    /// Privacy statement page
    LinkPrivacy,
    /// Custom USA.gov attribution content
    Usagov,
    /// The anonymous slot (link component child content)
    Default,
}

impl SlotName {
    /// The seven required links, in their fixed rendering order
    pub const REQUIRED_LINKS: [SlotName; 7] = [
        SlotName::LinkAbout,
        SlotName::LinkAccessibility,
        SlotName::LinkFoia,
        SlotName::LinkFear,
        SlotName::LinkOig,
        SlotName::LinkPerformance,
        SlotName::LinkPrivacy,
    ];

    /// The slot attribute value for this name
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotName::Domain => "domain",
            SlotName::Logo => "logo",
            SlotName::AgencyIntro => "agency-intro",
            SlotName::AgencyPrimary => "agency-primary",
            SlotName::AgencySecondary => "agency-secondary",
            SlotName::AgencyConjunction => "agency-conjunction",
            SlotName::AgencyTaxpayer => "agency-taxpayer",
            SlotName::Disclaimer => "disclaimer",
            SlotName::LinkAbout => "link-about",
            SlotName::LinkAccessibility => "link-accessibility",
            SlotName::LinkFoia => "link-foia",
            SlotName::LinkFear => "link-fear",
            SlotName::LinkOig => "link-oig",
            SlotName::LinkPerformance => "link-performance",
            SlotName::LinkPrivacy => "link-privacy",
            SlotName::Usagov => "usagov",
            SlotName::Default => "",
        }
    }

    /// Parse a slot attribute value.
    ///
    /// Accepts the `primary-agency`/`secondary-agency` spellings some host
    /// pages use for the agency slots.
    pub fn from_name(name: &str) -> Option<SlotName> {
        match name {
            "domain" => Some(SlotName::Domain),
            "logo" => Some(SlotName::Logo),
            "agency-intro" => Some(SlotName::AgencyIntro),
            "agency-primary" | "primary-agency" => Some(SlotName::AgencyPrimary),
            "agency-secondary" | "secondary-agency" => Some(SlotName::AgencySecondary),
            "agency-conjunction" => Some(SlotName::AgencyConjunction),
            "agency-taxpayer" => Some(SlotName::AgencyTaxpayer),
            "disclaimer" => Some(SlotName::Disclaimer),
            "link-about" => Some(SlotName::LinkAbout),
            "link-accessibility" => Some(SlotName::LinkAccessibility),
            "link-foia" => Some(SlotName::LinkFoia),
            "link-fear" => Some(SlotName::LinkFear),
            "link-oig" => Some(SlotName::LinkOig),
            "link-performance" => Some(SlotName::LinkPerformance),
            "link-privacy" => Some(SlotName::LinkPrivacy),
            "usagov" => Some(SlotName::Usagov),
            "" => Some(SlotName::Default),
            _ => None,
        }
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A host-provided node assigned to a slot.
///
/// Minimal node-like value: a tag, its attributes, its text, and nested
/// children. The component reads it, never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotNode {
    tag: String,
    text: String,
    attrs: Vec<(String, String)>,
    children: Vec<SlotNode>,
}

impl SlotNode {
    /// Create a node with the given tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set the node's own text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Add an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Append a nested child node
    pub fn child(mut self, child: SlotNode) -> Self {
        self.children.push(child);
        self
    }

    /// The node's tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Look up an attribute value by name
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    /// Whether the node carries any non-whitespace text
    pub fn has_text(&self) -> bool {
        !self.text_content().trim().is_empty()
    }

    /// Re-emit the node as a markup element
    pub fn to_element(&self) -> Element {
        let mut element = Element::new(&self.tag);
        for (name, value) in &self.attrs {
            element = element.attr(name, value);
        }
        if !self.text.is_empty() {
            element = element.text(&self.text);
        }
        for child in &self.children {
            element = element.child(child.to_element());
        }
        element
    }
}

/// Read-only access to the host's slotted content
pub trait SlotHost {
    /// First node assigned to the slot, if any
    fn query(&self, slot: SlotName) -> Option<&SlotNode>;

    /// All nodes assigned to the slot, in insertion order
    fn query_all(&self, slot: SlotName) -> Vec<&SlotNode>;
}

/// Plain map-backed [`SlotHost`] implementation
#[derive(Debug, Clone, Default)]
pub struct SlotMap {
    nodes: HashMap<SlotName, Vec<SlotNode>>,
}

impl SlotMap {
    /// Create an empty slot map
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a node to a slot (appends when the slot already has nodes)
    pub fn insert(&mut self, slot: SlotName, node: SlotNode) {
        self.nodes.entry(slot).or_default().push(node);
    }

    /// Builder-style [`SlotMap::insert`]
    pub fn with(mut self, slot: SlotName, node: SlotNode) -> Self {
        self.insert(slot, node);
        self
    }
}

impl SlotHost for SlotMap {
    fn query(&self, slot: SlotName) -> Option<&SlotNode> {
        self.nodes.get(&slot).and_then(|nodes| nodes.first())
    }

    fn query_all(&self, slot: SlotName) -> Vec<&SlotNode> {
        self.nodes
            .get(&slot)
            .map(|nodes| nodes.iter().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips() {
        for slot in SlotName::REQUIRED_LINKS {
            assert_eq!(SlotName::from_name(slot.as_str()), Some(slot));
        }
    }

    #[test]
    fn test_from_name_accepts_agency_aliases() {
        assert_eq!(
            SlotName::from_name("primary-agency"),
            Some(SlotName::AgencyPrimary)
        );
        assert_eq!(
            SlotName::from_name("secondary-agency"),
            Some(SlotName::AgencySecondary)
        );
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        assert_eq!(SlotName::from_name("link-sitemap"), None);
    }

    #[test]
    fn test_text_content_includes_descendants() {
        let node = SlotNode::new("span")
            .text("Department of ")
            .child(SlotNode::new("em").text("Examples"));
        assert_eq!(node.text_content(), "Department of Examples");
        assert!(node.has_text());
    }

    #[test]
    fn test_whitespace_only_text_is_empty() {
        let node = SlotNode::new("span").text("   ");
        assert!(!node.has_text());
    }

    #[test]
    fn test_query_returns_first_of_many() {
        let slots = SlotMap::new()
            .with(SlotName::Logo, SlotNode::new("a").attr("id", "first"))
            .with(SlotName::Logo, SlotNode::new("a").attr("id", "second"));
        let first = slots.query(SlotName::Logo).expect("logo slot");
        assert_eq!(first.get_attr("id"), Some("first"));
        assert_eq!(slots.query_all(SlotName::Logo).len(), 2);
    }

    #[test]
    fn test_query_missing_slot() {
        let slots = SlotMap::new();
        assert!(slots.query(SlotName::LinkAbout).is_none());
        assert!(slots.query_all(SlotName::Logo).is_empty());
    }
}
