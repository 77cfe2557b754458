//! Attributes - Host Attribute Surface
//!
//! The string attribute map components are configured through when driven by
//! the registry. Boolean attributes follow the HTML convention: presence is
//! true, the value is irrelevant.

/// Host-supplied attributes for one component instance
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Create an empty attribute map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any earlier value
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.entries.push((name, value));
        }
        self
    }

    /// The attribute's value, if present
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the attribute is present at all (boolean-attribute semantics)
    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_is_independent_of_value() {
        let attrs = Attributes::new().set("taxpayer", "");
        assert!(attrs.has("taxpayer"));
        assert_eq!(attrs.get("taxpayer"), Some(""));
        assert!(!attrs.has("lang"));
    }

    #[test]
    fn test_set_replaces_value() {
        let attrs = Attributes::new().set("lang", "en").set("lang", "es");
        assert_eq!(attrs.get("lang"), Some("es"));
    }
}
