//! Colors - Design System Palette
//!
//! Default values for the themeable link states. Hosts override them through
//! the CSS custom properties in [`crate::theme`]; these are only fallbacks.

/// USWDS color palette - All colors are accessed via associated functions
pub struct UswdsColors;

impl UswdsColors {
    // Link states
    /// Default link color - Primary blue
    pub fn link() -> &'static str {
        "#005ea2"
    }
    /// Visited link - Violet
    pub fn link_visited() -> &'static str {
        "#54278f"
    }
    /// Hovered link - Dark blue
    pub fn link_hover() -> &'static str {
        "#1a4480"
    }
    /// Active link - Darkest blue
    pub fn link_active() -> &'static str {
        "#162e51"
    }

    // Focus outline
    /// Focus outline color - Bright blue
    pub fn focus() -> &'static str {
        "#2491ff"
    }
    /// Focus outline width
    pub fn focus_width() -> &'static str {
        "0.25rem"
    }
    /// Focus outline style
    pub fn focus_style() -> &'static str {
        "solid"
    }
    /// Focus outline offset
    pub fn focus_offset() -> &'static str {
        "0"
    }
}
