//! Composite Components
//!
//! Components assembled from several sections.

pub mod identifier;

pub use identifier::Identifier;
