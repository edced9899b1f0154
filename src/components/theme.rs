//! Global stylesheet component

use maud::{Markup, PreEscaped, html};
use syntect::highlighting::ThemeSet;
use syntect::html::{ClassStyle, css_for_theme_with_class_style};

use crate::error::{Error, Result};

const GLOBAL: &str = include_str!("../../assets/global.css");

/// Syntax theme used when none is configured.
pub const DEFAULT_SYNTAX_THEME: &str = "base16-eighties.dark";

/// Class prefix shared by highlighted code spans and the theme stylesheet.
pub(crate) const HIGHLIGHT_CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hl-" };

/// Classes on the page root that scope the theme and typography variables.
pub const ROOT_CLASSES: &str = "theme-default typo-default";

/// Page wide stylesheet injected into every document head.
///
/// Holds the layout, colour and typography custom properties plus base
/// element rules, optionally followed by class based syntax theme rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalStyle {
    syntax_css: Option<String>,
}

impl GlobalStyle {
    /// Creates the stylesheet without syntax theme rules.
    pub fn base() -> Self {
        Self { syntax_css: None }
    }

    /// Creates the stylesheet with rules for a bundled syntect theme.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Theme`] if no bundled theme has this name, or
    /// [`Error::Highlight`] if CSS generation fails.
    pub fn with_syntax_theme(name: &str) -> Result<Self> {
        let themes = ThemeSet::load_defaults();
        let theme = themes
            .themes
            .get(name)
            .ok_or_else(|| Error::Theme(name.to_string()))?;
        let css = css_for_theme_with_class_style(theme, HIGHLIGHT_CLASS_STYLE)?;

        Ok(Self {
            syntax_css: Some(css),
        })
    }

    /// Full stylesheet text.
    pub fn css(&self) -> String {
        match &self.syntax_css {
            Some(syntax) => format!("{}\n{}", GLOBAL, syntax),
            None => GLOBAL.to_string(),
        }
    }

    /// Renders the stylesheet as a `<style>` element.
    pub fn render(&self) -> Markup {
        html! {
            style { (PreEscaped(self.css())) }
        }
    }
}

impl Default for GlobalStyle {
    fn default() -> Self {
        Self::base()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_contains_theme_variables() {
        // Arrange & Act
        let css = GlobalStyle::base().css();

        // Assert
        assert!(css.contains(":root"), "Should define root variables");
        assert!(css.contains("--nav-h: 6rem"));
        assert!(css.contains("--main-width: 80rem"));
        assert!(css.contains(".theme-default"));
        assert!(css.contains("--prime: #ff3e00"));
        assert!(css.contains(".typo-default"));
        assert!(css.contains("--lh: 1.5"));
        assert!(css.contains("#2f1e2e"), "Should override code block background");
    }

    #[test]
    fn test_media_query_overrides_spacing() {
        // Arrange & Act
        let css = GlobalStyle::base().css();
        let media = css
            .find("@media screen and (min-width: 768px)")
            .expect("Should contain media query");

        // Assert
        let tail = &css[media..];
        assert!(tail.contains("--side-page: 14vw"));
        assert!(tail.contains("--top-offset: 10rem"));
        assert!(tail.contains("--side-nav: 4.8rem"));
    }

    #[test]
    fn test_syntax_theme_appends_rules() {
        // Arrange & Act
        let style =
            GlobalStyle::with_syntax_theme(DEFAULT_SYNTAX_THEME).expect("Default theme exists");
        let css = style.css();

        // Assert
        assert!(css.starts_with(GLOBAL), "Global rules come first");
        assert!(css.len() > GLOBAL.len(), "Theme rules should be appended");
        assert!(css.contains(".hl-"), "Theme rules use hl- prefix: {}", css);
    }

    #[test]
    fn test_unknown_syntax_theme() {
        // Arrange & Act
        let result = GlobalStyle::with_syntax_theme("No-Such-Theme");

        // Assert
        assert!(
            matches!(result, Err(Error::Theme(ref name)) if name == "No-Such-Theme"),
            "Unknown theme should be rejected"
        );
    }

    #[test]
    fn test_render_style_element_unescaped() {
        // Arrange & Act
        let html = GlobalStyle::base().render().into_string();

        // Assert
        assert!(html.starts_with("<style>"));
        assert!(html.ends_with("</style>"));
        assert!(html.contains("rgba(255, 255, 255, .75)"));
        assert!(!html.contains("&gt;"), "CSS must not be escaped");
    }
}
