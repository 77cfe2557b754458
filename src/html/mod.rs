//! Html - Markup Builder
//!
//! A small owned-element builder that components chain into trees and render
//! to deterministic HTML strings. Classes and attributes are emitted in
//! insertion order so repeated renders of the same tree are byte-identical.

use std::fmt::Write as _;

/// Tags that never take a closing tag
const VOID_TAGS: &[&str] = &["area", "br", "hr", "img", "input", "link", "meta"];

/// A node in the markup tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A nested element
    Element(Element),
    /// Text content, escaped on render
    Text(String),
    /// Pre-rendered markup, emitted verbatim
    Raw(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

/// An HTML element under construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

/// Create a new element with the given tag
pub fn el(tag: impl Into<String>) -> Element {
    Element::new(tag)
}

impl Element {
    /// Create a new element with the given tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Append a class (deduplicated, insertion order preserved)
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Set an attribute; a repeated name overwrites the earlier value in place
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.attrs.push((name, value));
        }
        self
    }

    /// Append a child node
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several child nodes
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append a text child (escaped on render)
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// The element's tag name
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

    /// Apply `f` to every descendant element (including self), depth-first
    pub fn map_elements(mut self, f: &impl Fn(Element) -> Element) -> Self {
        self.children = self
            .children
            .into_iter()
            .map(|child| match child {
                Node::Element(element) => Node::Element(element.map_elements(f)),
                other => other,
            })
            .collect();
        f(self)
    }

    /// Render the element tree to an HTML string
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape_attr(&self.classes.join(" ")));
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }

        for child in &self.children {
            match child {
                Node::Element(element) => element.write_html(out),
                Node::Text(text) => out.push_str(&escape(text)),
                Node::Raw(markup) => out.push_str(markup),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Escape text content for safe interpolation into markup
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an attribute value (double-quoted context)
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_render() {
        let markup = el("section")
            .class("outer")
            .child(el("p").text("hello"))
            .to_html();
        assert_eq!(markup, "<section class=\"outer\"><p>hello</p></section>");
    }

    #[test]
    fn test_text_is_escaped() {
        let markup = el("span").text("a < b & c > d").to_html();
        assert_eq!(markup, "<span>a &lt; b &amp; c &gt; d</span>");
    }

    #[test]
    fn test_attr_is_escaped() {
        let markup = el("a").attr("href", "/q?a=1&b=\"2\"").to_html();
        assert_eq!(markup, "<a href=\"/q?a=1&amp;b=&quot;2&quot;\"></a>");
    }

    #[test]
    fn test_void_tag_has_no_closing_tag() {
        let markup = el("img").attr("src", "logo.svg").to_html();
        assert_eq!(markup, "<img src=\"logo.svg\">");
    }

    #[test]
    fn test_repeated_attr_overwrites() {
        let markup = el("a").attr("href", "/old").attr("href", "/new").to_html();
        assert_eq!(markup, "<a href=\"/new\"></a>");
    }

    #[test]
    fn test_class_is_deduplicated() {
        let markup = el("div").class("x").class("y").class("x").to_html();
        assert_eq!(markup, "<div class=\"x y\"></div>");
    }

    #[test]
    fn test_render_is_deterministic() {
        let element = el("nav")
            .class("usa-identifier__section")
            .attr("aria-label", "Important links")
            .child(el("ul").child(el("li").text("one")));
        assert_eq!(element.to_html(), element.to_html());
    }

    #[test]
    fn test_map_elements_reaches_descendants() {
        let element = el("a")
            .child(el("img").attr("src", "x.svg"))
            .map_elements(&|e| {
                if e.tag() == "img" {
                    e.class("marked")
                } else {
                    e
                }
            });
        assert_eq!(
            element.to_html(),
            "<a><img class=\"marked\" src=\"x.svg\"></a>"
        );
    }
}
