//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::metadata::HeadMeta;
use super::nav::navigation;
use super::theme::{GlobalStyle, ROOT_CLASSES};

/// Wraps page content with standard HTML structure
///
/// Provides DOCTYPE, an English `html` element, head tags from resolved
/// metadata and the global stylesheet. The body holds the navigation list
/// followed by the already rendered page content, inside a root element
/// carrying the theme classes.
///
/// # Arguments
///
/// * `head`: Resolved page metadata
/// * `style`: Global stylesheet
/// * `content`: Rendered page body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(head: &HeadMeta, style: &GlobalStyle, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                (head.render())
                (style.render())
            }
            body {
                div class=(ROOT_CLASSES) {
                    (navigation())
                    (content)
                }
            }
        }
    }
}
