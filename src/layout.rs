//! Page layout shared by every generated document.

use maud::Markup;

use crate::components::layout::page_wrapper;
use crate::components::metadata::HeadMeta;
use crate::components::theme::GlobalStyle;
use crate::error::Result;
use crate::markdown::MarkdownRenderer;
use crate::page::Page;
use crate::site::SiteMetadata;

/// Composes site metadata, global style, navigation and rendered content.
pub struct Layout<'a> {
    site: SiteMetadata,
    style: GlobalStyle,
    renderer: MarkdownRenderer<'a>,
}

impl<'a> Layout<'a> {
    pub fn new(site: SiteMetadata, style: GlobalStyle, renderer: MarkdownRenderer<'a>) -> Self {
        Self {
            site,
            style,
            renderer,
        }
    }

    pub fn site(&self) -> &SiteMetadata {
        &self.site
    }

    /// Renders a page into a complete HTML document.
    ///
    /// # Errors
    ///
    /// Returns error if the page body fails to render.
    pub fn render(&self, page: &Page) -> Result<Markup> {
        let head = HeadMeta::resolve(&self.site, page.frontmatter());
        let content = self.renderer.render(page.body())?;
        Ok(page_wrapper(&head, &self.style, content))
    }
}
