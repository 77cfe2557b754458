//! Content - Localized Default Text
//!
//! The identifier's default copy lives in an embedded two-locale JSON table.
//! Components read the parsed table through [`LocalizedContent::for_locale`];
//! editing the asset changes the copy without touching code.

use serde::Deserialize;
use tracing::debug;

use crate::assets;
use crate::error::Result;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Spanish
    Es,
}

impl Locale {
    /// Parse a language tag, falling back to English for anything unknown
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "en" => Locale::En,
            "es" => Locale::Es,
            other => {
                debug!(lang = other, "unknown language tag, falling back to en");
                Locale::En
            }
        }
    }

    /// The language tag for this locale
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }
}

/// The full two-locale content table
#[derive(Debug, Clone, Deserialize)]
pub struct ContentTable {
    /// English content
    pub en: LocalizedContent,
    /// Spanish content
    pub es: LocalizedContent,
}

impl ContentTable {
    /// The record for the given locale
    pub fn get(&self, locale: Locale) -> &LocalizedContent {
        match locale {
            Locale::En => &self.en,
            Locale::Es => &self.es,
        }
    }
}

/// Default text for one locale
#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedContent {
    /// Masthead phrases
    pub masthead: MastheadContent,
    /// Taxpayer disclaimer sentence
    pub taxpayer: String,
    /// Default labels for the seven required links
    pub required_links: RequiredLinkLabels,
    /// ARIA labels for the identifier's landmark sections
    pub aria_labels: AriaLabels,
    /// USA.gov attribution content
    pub usagov: UsagovContent,
}

impl LocalizedContent {
    /// The content record for a locale, from the embedded table
    pub fn for_locale(locale: Locale) -> Result<&'static LocalizedContent> {
        Ok(assets::content_table()?.get(locale))
    }
}

/// Masthead intro and conjunction phrases
#[derive(Debug, Clone, Deserialize)]
pub struct MastheadContent {
    /// Phrase preceding the primary agency name
    pub intro: String,
    /// Phrase joining the primary and secondary agency names
    pub conjunction: String,
}

/// Default titles for the required links
#[derive(Debug, Clone, Deserialize)]
pub struct RequiredLinkLabels {
    pub about: String,
    pub accessibility: String,
    pub foia: String,
    pub no_fear: String,
    pub oig: String,
    pub performance: String,
    pub privacy: String,
}

/// ARIA labels for the identifier's landmark sections
#[derive(Debug, Clone, Deserialize)]
pub struct AriaLabels {
    /// Outer container label (overridable via the `label` attribute)
    pub main: String,
    /// Masthead section label
    pub masthead: String,
    /// Required-links navigation label
    pub links: String,
}

/// USA.gov attribution text and link
#[derive(Debug, Clone, Deserialize)]
pub struct UsagovContent {
    pub description: String,
    pub link_label: String,
    pub link_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tag_falls_back_to_en() {
        assert_eq!(Locale::from_tag("fr"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
        assert_eq!(Locale::from_tag("EN"), Locale::En);
    }

    #[test]
    fn test_known_tags() {
        assert_eq!(Locale::from_tag("en"), Locale::En);
        assert_eq!(Locale::from_tag("es"), Locale::Es);
    }

    #[test]
    fn test_fallback_is_idempotent() {
        let first = Locale::from_tag("de");
        let second = Locale::from_tag("de");
        assert_eq!(first, second);
    }

    #[test]
    fn test_both_locales_resolve() {
        let en = LocalizedContent::for_locale(Locale::En).expect("en content");
        let es = LocalizedContent::for_locale(Locale::Es).expect("es content");
        assert!(!en.masthead.intro.is_empty());
        assert!(!es.masthead.intro.is_empty());
        assert_ne!(en.masthead.intro, es.masthead.intro);
        assert_eq!(en.usagov.link_label, "Visit USA.gov");
    }
}
