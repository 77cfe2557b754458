//! usa-components
//!
//! Accessible government design system components rendered server-side to
//! static HTML: a themeable link and the three-section agency identifier
//! footer. Hosts supply attributes and slotted content; every render is a
//! single deterministic pass with no shared state between instances.

pub mod assets;
pub mod components;
pub mod error;
pub mod html;
pub mod theme;

pub use components::attrs::Attributes;
pub use components::composite::identifier::{
    Identifier, Locale, SlotHost, SlotMap, SlotName, SlotNode, SlotPolicy,
};
pub use components::primitives::Link;
pub use components::registry::ComponentRegistry;
pub use error::{Error, Result};
