//! Error types for usa-components
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

use crate::components::composite::identifier::slots::SlotName;

/// Main error type for the crate
#[derive(Debug, Snafu)]
pub enum Error {
    /// A required slot was not supplied by the host page
    #[snafu(display("missing required slot \"{slot}\""))]
    MissingSlot { slot: SlotName },

    /// A required-link slot is present but carries no href attribute
    #[snafu(display("slot \"{slot}\" has no href attribute"))]
    MissingHref { slot: SlotName },

    /// A tag name was registered twice
    #[snafu(display("component tag \"{tag}\" is already registered"))]
    DuplicateTag { tag: String },

    /// A render was requested for a tag nothing is registered under
    #[snafu(display("no component registered for tag \"{tag}\""))]
    UnknownTag { tag: String },

    /// The embedded content asset could not be located
    #[snafu(display("content asset not found: {path}"))]
    ContentAsset { path: String },

    /// JSON deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
