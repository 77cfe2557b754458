//! Theme - CSS Custom Property Contract
//!
//! Styling is tuned exclusively through CSS custom properties; there is no
//! programmatic styling API. Each helper emits a `var()` reference carrying
//! the design system default as its fallback.

pub mod colors;

pub use colors::UswdsColors;

/// A custom-property reference with a fallback value
pub fn themed(property: &str, fallback: &str) -> String {
    format!("var({property}, {fallback})")
}

/// The link component's rule block, one rule per color state
pub fn link_stylesheet() -> String {
    format!(
        "a {{\n  color: {color};\n  text-decoration: underline;\n}}\n\
         a:visited {{\n  color: {visited};\n}}\n\
         a:hover {{\n  color: {hover};\n}}\n\
         a:active {{\n  color: {active};\n}}\n\
         a:focus {{\n  outline: {focus_width} {focus_style} {focus_color};\n  outline-offset: {focus_offset};\n}}\n",
        color = themed("--theme-link-color", UswdsColors::link()),
        visited = themed("--theme-link-visited-color", UswdsColors::link_visited()),
        hover = themed("--theme-link-hover-color", UswdsColors::link_hover()),
        active = themed("--theme-link-active-color", UswdsColors::link_active()),
        focus_width = themed("--theme-focus-width", UswdsColors::focus_width()),
        focus_style = themed("--theme-focus-style", UswdsColors::focus_style()),
        focus_color = themed("--theme-focus-color", UswdsColors::focus()),
        focus_offset = themed("--theme-focus-offset", UswdsColors::focus_offset()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themed_reference() {
        assert_eq!(
            themed("--theme-link-color", UswdsColors::link()),
            "var(--theme-link-color, #005ea2)"
        );
    }

    #[test]
    fn test_stylesheet_covers_every_state() {
        let css = link_stylesheet();
        for state in ["a {", "a:visited", "a:hover", "a:active", "a:focus"] {
            assert!(css.contains(state), "missing rule for {state}");
        }
        assert!(css.contains("outline-offset: var(--theme-focus-offset, 0);"));
    }
}
