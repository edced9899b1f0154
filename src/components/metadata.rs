//! Document head metadata components

use maud::{Markup, html};

use crate::frontmatter::Frontmatter;
use crate::site::SiteMetadata;

/// Separator used when joining keywords into the meta tag content.
const KEYWORD_SEPARATOR: &str = ", ";

/// Metadata resolved for a single page.
///
/// Site values act as defaults; frontmatter values override them when the
/// page supplies them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

impl HeadMeta {
    /// Resolves head metadata for a page
    ///
    /// Keywords come from the frontmatter whenever it carries a keywords
    /// list, even an empty one. Description falls back to the site value
    /// when the frontmatter omits it or leaves it empty.
    ///
    /// # Arguments
    ///
    /// * `site`: Site wide defaults
    /// * `frontmatter`: Optional page overrides
    ///
    /// # Returns
    ///
    /// Title, description and joined keyword string for the head tags
    pub fn resolve(site: &SiteMetadata, frontmatter: Option<&Frontmatter>) -> Self {
        let keywords = frontmatter
            .and_then(|f| f.keywords.as_ref())
            .unwrap_or(&site.keywords)
            .join(KEYWORD_SEPARATOR);

        let description = frontmatter
            .and_then(|f| f.description.as_deref())
            .filter(|d| !d.is_empty())
            .unwrap_or(&site.description)
            .to_string();

        Self {
            title: site.title.clone(),
            description,
            keywords,
        }
    }

    /// Renders head children: charset, viewport, title, description, keywords.
    pub fn render(&self) -> Markup {
        html! {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (self.title) }
            meta name="description" content=(self.description);
            meta name="keywords" content=(self.keywords);
        }
    }
}
