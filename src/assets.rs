//! Embedded assets for usa-components
//!
//! Uses rust-embed to bundle the localized content table at compile time, so
//! the crate renders with no filesystem access at runtime.

use std::sync::OnceLock;

use rust_embed::RustEmbed;

use crate::components::composite::identifier::content::ContentTable;
use crate::error::{Error, Result};

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "*.json"]
pub struct Assets;

const IDENTIFIER_CONTENT: &str = "identifier.json";

static CONTENT_TABLE: OnceLock<ContentTable> = OnceLock::new();

/// The parsed identifier content table, loaded once per process.
///
/// Parse failures surface on every call rather than poisoning the cache.
pub fn content_table() -> Result<&'static ContentTable> {
    if let Some(table) = CONTENT_TABLE.get() {
        return Ok(table);
    }
    let file = Assets::get(IDENTIFIER_CONTENT).ok_or_else(|| Error::ContentAsset {
        path: IDENTIFIER_CONTENT.to_string(),
    })?;
    let parsed: ContentTable = serde_json::from_slice(&file.data)?;
    Ok(CONTENT_TABLE.get_or_init(|| parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_asset_is_embedded() {
        assert!(Assets::get(IDENTIFIER_CONTENT).is_some());
    }

    #[test]
    fn test_content_table_parses() {
        let table = content_table().expect("content table");
        assert_eq!(table.en.required_links.foia, "FOIA requests");
        assert_eq!(table.es.masthead.conjunction, "y");
    }

    #[test]
    fn test_repeated_loads_share_the_table() {
        let first = content_table().expect("content table");
        let second = content_table().expect("content table");
        assert!(std::ptr::eq(first, second));
    }
}
