//! Registry - Explicit Component Registration
//!
//! Components register against a registry value the application constructs at
//! startup, rather than a process-wide table mutated as a module side effect.
//! Duplicate registration is an error instead of a silent conflict, and
//! registration stays testable in isolation.

use std::collections::HashMap;

use tracing::debug;

use crate::components::attrs::Attributes;
use crate::components::composite::identifier::Identifier;
use crate::components::composite::identifier::slots::SlotHost;
use crate::components::primitives::link::Link;
use crate::error::{Error, Result};

/// Renders one component instance from its attributes and slotted content
pub type RenderFn = fn(&Attributes, &dyn SlotHost) -> Result<String>;

/// Tag-to-component registry
#[derive(Default)]
pub struct ComponentRegistry {
    components: HashMap<String, RenderFn>,
}

impl ComponentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in components registered
    pub fn with_defaults() -> Result<Self> {
        let mut registry = Self::new();
        registry.register(Link::TAG, render_link)?;
        registry.register(Identifier::TAG, render_identifier)?;
        Ok(registry)
    }

    /// Register a render function under a tag name
    pub fn register(&mut self, tag: impl Into<String>, render: RenderFn) -> Result<()> {
        let tag = tag.into();
        if self.components.contains_key(&tag) {
            return Err(Error::DuplicateTag { tag });
        }
        debug!(tag = %tag, "registered component");
        self.components.insert(tag, render);
        Ok(())
    }

    /// Look up the render function for a tag
    pub fn get(&self, tag: &str) -> Option<RenderFn> {
        self.components.get(tag).copied()
    }

    /// Render the component registered under `tag`
    pub fn render(&self, tag: &str, attrs: &Attributes, slots: &dyn SlotHost) -> Result<String> {
        let render = self.get(tag).ok_or_else(|| Error::UnknownTag {
            tag: tag.to_string(),
        })?;
        render(attrs, slots)
    }
}

fn render_link(attrs: &Attributes, slots: &dyn SlotHost) -> Result<String> {
    Ok(Link::from_attrs(attrs, slots).render())
}

fn render_identifier(attrs: &Attributes, slots: &dyn SlotHost) -> Result<String> {
    Identifier::from_attrs(attrs).render(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::identifier::slots::{SlotMap, SlotName, SlotNode};

    #[test]
    fn test_defaults_register_both_components() {
        let registry = ComponentRegistry::with_defaults().expect("registry");
        assert!(registry.get(Link::TAG).is_some());
        assert!(registry.get(Identifier::TAG).is_some());
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = ComponentRegistry::with_defaults().expect("registry");
        let err = registry
            .register(Link::TAG, render_link)
            .expect_err("duplicate must fail");
        match err {
            Error::DuplicateTag { tag } => assert_eq!(tag, Link::TAG),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_tag_fails() {
        let registry = ComponentRegistry::with_defaults().expect("registry");
        let err = registry
            .render("usa-banner", &Attributes::new(), &SlotMap::new())
            .expect_err("unknown tag must fail");
        assert!(matches!(err, Error::UnknownTag { .. }));
    }

    #[test]
    fn test_registry_render_matches_builder_render() {
        let registry = ComponentRegistry::with_defaults().expect("registry");
        let attrs = Attributes::new().set("href", "https://example.gov");
        let slots = SlotMap::new().with(
            SlotName::Default,
            SlotNode::new("span").text("Example"),
        );
        let via_registry = registry
            .render(Link::TAG, &attrs, &slots)
            .expect("render succeeds");
        let via_builder = Link::from_attrs(&attrs, &slots).render();
        assert_eq!(via_registry, via_builder);
    }
}
