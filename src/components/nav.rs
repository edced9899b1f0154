//! Top level navigation component

use maud::{Markup, html};

/// A single navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    /// Site path or absolute URL
    pub to: &'static str,
    pub label: &'static str,
}

/// Fixed navigation rendered on every page, in display order.
pub const NAVIGATION: [NavEntry; 3] = [
    NavEntry {
        to: "/",
        label: "About",
    },
    NavEntry {
        to: "/blog",
        label: "Blog",
    },
    NavEntry {
        to: "https://roadtoreact.com",
        label: "Courses",
    },
];

/// Renders the navigation list
///
/// One list item per entry of [`NAVIGATION`], in order, each holding a
/// link built by [`link`].
pub fn navigation() -> Markup {
    html! {
        ul {
            @for entry in &NAVIGATION {
                li { (link(entry.to, entry.label)) }
            }
        }
    }
}

/// Renders a text link.
pub fn link(to: &str, label: &str) -> Markup {
    anchor(to, None, html! { (label) })
}

/// Renders a link around arbitrary markup
///
/// Site paths become plain anchors. Absolute http(s) URLs open in a new tab
/// and drop the opener and referrer.
///
/// # Arguments
///
/// * `to`: Site path or absolute URL
/// * `title`: Optional title attribute
/// * `children`: Link content
pub fn anchor(to: &str, title: Option<&str>, children: Markup) -> Markup {
    if is_external(to) {
        html! {
            a href=(to) title=[title] target="_blank" rel="noopener noreferrer" { (children) }
        }
    } else {
        html! {
            a href=(to) title=[title] { (children) }
        }
    }
}

/// Checks whether a link target leaves the site.
pub fn is_external(to: &str) -> bool {
    to.starts_with("http://") || to.starts_with("https://")
}
