//! Primitive Components
//!
//! Single-element building blocks.

pub mod link;

pub use link::Link;
