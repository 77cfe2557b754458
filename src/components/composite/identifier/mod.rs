//! Identifier Component
//!
//! The three-section agency footer block: masthead, required-links
//! navigation, and USA.gov attribution.

pub mod content;
pub mod identifier;
pub mod slots;

pub use content::{Locale, LocalizedContent};
pub use identifier::{Identifier, RequiredLink, SlotPolicy};
pub use slots::{SlotHost, SlotMap, SlotName, SlotNode};
