//! Components - Reusable UI Components
//!
//! Pure rendering components that don't depend on services or do I/O.

pub mod attrs;
pub mod composite;
pub mod primitives;
pub mod registry;
