//! Document elements and the components that render them.
//!
//! A [`ComponentMap`] assigns a render function to each kind of markdown
//! element. Elements without a mapped component fall back to their plain
//! HTML form, so an empty map reproduces ordinary markdown output.

use maud::{Markup, html};
use std::collections::HashMap;
use std::fmt;

use crate::components::nav;

/// Markdown element handed to a component, with its element specific data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Paragraph,
    /// Heading with level 1..=6, its plain text content and an anchor id
    /// unique within the rendered document
    Heading { level: u8, text: String, id: String },
    BlockQuote,
    List { ordered: bool, start: usize },
    ListItem,
    /// Fenced or indented code; children are already highlighted markup
    CodeBlock { language: Option<String> },
    Code,
    Emphasis,
    Strong,
    Strikethrough,
    Link { url: String, title: String },
    Image { url: String, title: String, alt: String },
    ThematicBreak,
    Table,
    TableRow { header: bool },
    TableCell { header: bool },
    LineBreak,
}

/// Element discriminant used as the component map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Paragraph,
    Heading,
    BlockQuote,
    List,
    ListItem,
    CodeBlock,
    Code,
    Emphasis,
    Strong,
    Strikethrough,
    Link,
    Image,
    ThematicBreak,
    Table,
    TableRow,
    TableCell,
    LineBreak,
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Paragraph => ElementKind::Paragraph,
            Element::Heading { .. } => ElementKind::Heading,
            Element::BlockQuote => ElementKind::BlockQuote,
            Element::List { .. } => ElementKind::List,
            Element::ListItem => ElementKind::ListItem,
            Element::CodeBlock { .. } => ElementKind::CodeBlock,
            Element::Code => ElementKind::Code,
            Element::Emphasis => ElementKind::Emphasis,
            Element::Strong => ElementKind::Strong,
            Element::Strikethrough => ElementKind::Strikethrough,
            Element::Link { .. } => ElementKind::Link,
            Element::Image { .. } => ElementKind::Image,
            Element::ThematicBreak => ElementKind::ThematicBreak,
            Element::Table => ElementKind::Table,
            Element::TableRow { .. } => ElementKind::TableRow,
            Element::TableCell { .. } => ElementKind::TableCell,
            Element::LineBreak => ElementKind::LineBreak,
        }
    }
}

/// Render function for one element kind.
///
/// Receives the element and its rendered children.
pub type Component = Box<dyn Fn(&Element, Markup) -> Markup + Send + Sync>;

/// Mapping from element kinds to components.
#[derive(Default)]
pub struct ComponentMap {
    components: HashMap<ElementKind, Component>,
}

impl ComponentMap {
    /// Creates an empty map; every element renders as plain HTML.
    pub fn new() -> Self {
        Self::default()
    }

    /// Components tied to page structure: anchored headings, framed
    /// blockquotes and labelled code blocks.
    pub fn layout() -> Self {
        let mut map = Self::new();
        map.insert(ElementKind::Heading, |element, children| match element {
            Element::Heading { level, id, .. } => heading(*level, Some(id.as_str()), children),
            other => standard(other, children),
        });
        map.insert(ElementKind::BlockQuote, |_, children| {
            html! { blockquote class="blockquote" { (children) } }
        });
        map.insert(ElementKind::CodeBlock, |element, children| match element {
            Element::CodeBlock { language } => html! {
                div class="code-highlight" data-language=[language.as_deref()] {
                    (standard(element, children))
                }
            },
            other => standard(other, children),
        });
        map
    }

    /// Components shared by all content: paragraphs, site aware links,
    /// lazily loaded images and scrollable tables.
    pub fn global() -> Self {
        let mut map = Self::new();
        map.insert(ElementKind::Paragraph, |_, children| {
            html! { p class="paragraph" { (children) } }
        });
        map.insert(ElementKind::Link, |element, children| match element {
            Element::Link { url, title } => {
                nav::anchor(url, Some(title.as_str()).filter(|t| !t.is_empty()), children)
            }
            other => standard(other, children),
        });
        map.insert(ElementKind::Image, |element, children| match element {
            Element::Image { url, title, alt } => html! {
                img src=(url) alt=(alt) title=[Some(title.as_str()).filter(|t| !t.is_empty())] loading="lazy";
            },
            other => standard(other, children),
        });
        map.insert(ElementKind::Table, |element, children| {
            html! { div class="table-wrapper" { (standard(element, children)) } }
        });
        map
    }

    /// Layout components merged with global components.
    pub fn provider() -> Self {
        Self::layout().merge(Self::global())
    }

    /// Assigns a component to an element kind, replacing any previous one.
    pub fn insert<F>(&mut self, kind: ElementKind, component: F)
    where
        F: Fn(&Element, Markup) -> Markup + Send + Sync + 'static,
    {
        self.components.insert(kind, Box::new(component));
    }

    /// Combines two maps; entries from `other` win.
    pub fn merge(mut self, other: ComponentMap) -> Self {
        self.components.extend(other.components);
        self
    }

    pub fn contains(&self, kind: ElementKind) -> bool {
        self.components.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Renders an element through its component, or as plain HTML.
    pub fn render(&self, element: &Element, children: Markup) -> Markup {
        match self.components.get(&element.kind()) {
            Some(component) => component(element, children),
            None => standard(element, children),
        }
    }
}

impl fmt::Debug for ComponentMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.components.keys().collect();
        kinds.sort_by_key(|kind| format!("{:?}", kind));
        f.debug_struct("ComponentMap")
            .field("components", &kinds)
            .finish()
    }
}

/// Plain HTML rendering of an element.
pub fn standard(element: &Element, children: Markup) -> Markup {
    match element {
        Element::Paragraph => html! { p { (children) } },
        Element::Heading { level, .. } => heading(*level, None, children),
        Element::BlockQuote => html! { blockquote { (children) } },
        Element::List { ordered: false, .. } => html! { ul { (children) } },
        Element::List {
            ordered: true,
            start,
        } => html! {
            ol start=[Some(start).filter(|s| **s != 1)] { (children) }
        },
        Element::ListItem => html! { li { (children) } },
        Element::CodeBlock { language } => html! {
            pre { code class=[language.as_ref().map(|l| format!("language-{}", l))] { (children) } }
        },
        Element::Code => html! { code { (children) } },
        Element::Emphasis => html! { em { (children) } },
        Element::Strong => html! { strong { (children) } },
        Element::Strikethrough => html! { del { (children) } },
        Element::Link { url, title } => html! {
            a href=(url) title=[Some(title.as_str()).filter(|t| !t.is_empty())] { (children) }
        },
        Element::Image { url, title, alt } => html! {
            img src=(url) alt=(alt) title=[Some(title.as_str()).filter(|t| !t.is_empty())];
        },
        Element::ThematicBreak => html! { hr; },
        Element::Table => html! { table { (children) } },
        Element::TableRow { .. } => html! { tr { (children) } },
        Element::TableCell { header: true } => html! { th { (children) } },
        Element::TableCell { header: false } => html! { td { (children) } },
        Element::LineBreak => html! { br; },
    }
}

fn heading(level: u8, id: Option<&str>, children: Markup) -> Markup {
    match level {
        1 => html! { h1 id=[id] { (children) } },
        2 => html! { h2 id=[id] { (children) } },
        3 => html! { h3 id=[id] { (children) } },
        4 => html! { h4 id=[id] { (children) } },
        5 => html! { h5 id=[id] { (children) } },
        _ => html! { h6 id=[id] { (children) } },
    }
}

/// Converts heading text into an anchor id.
///
/// Lowercases alphanumerics, turns whitespace, `-` and `_` runs into a
/// single `-`, and drops everything else.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_map_renders_standard_html() {
        // Arrange
        let map = ComponentMap::new();

        // Act
        let html = map
            .render(&Element::Paragraph, html! { "text" })
            .into_string();

        // Assert
        assert_eq!(html, "<p>text</p>");
    }

    #[test]
    fn test_merge_later_map_wins() {
        // Arrange
        let mut first = ComponentMap::new();
        first.insert(ElementKind::Paragraph, |_, c| html! { p class="first" { (c) } });
        first.insert(ElementKind::Strong, |_, c| html! { b { (c) } });
        let mut second = ComponentMap::new();
        second.insert(ElementKind::Paragraph, |_, c| html! { p class="second" { (c) } });

        // Act
        let merged = first.merge(second);

        // Assert
        assert_eq!(merged.len(), 2, "Union of both maps");
        assert_eq!(
            merged.render(&Element::Paragraph, html! { "x" }).into_string(),
            r#"<p class="second">x</p>"#
        );
        assert_eq!(
            merged.render(&Element::Strong, html! { "y" }).into_string(),
            "<b>y</b>",
            "Entries only in the first map survive"
        );
    }

    #[test]
    fn test_provider_combines_layout_and_global() {
        // Arrange & Act
        let provider = ComponentMap::provider();

        // Assert
        for kind in [
            ElementKind::Heading,
            ElementKind::BlockQuote,
            ElementKind::CodeBlock,
            ElementKind::Paragraph,
            ElementKind::Link,
            ElementKind::Image,
            ElementKind::Table,
        ] {
            assert!(provider.contains(kind), "Provider should map {:?}", kind);
        }
        assert!(!provider.contains(ElementKind::Emphasis));
    }

    #[test]
    fn test_layout_heading_has_anchor_id() {
        // Arrange
        let element = Element::Heading {
            level: 2,
            text: "Getting Started".to_string(),
            id: "getting-started".to_string(),
        };

        // Act
        let html = ComponentMap::layout()
            .render(&element, html! { "Getting Started" })
            .into_string();

        // Assert
        assert_eq!(html, r#"<h2 id="getting-started">Getting Started</h2>"#);
    }

    #[test]
    fn test_layout_code_block_labels_language() {
        // Arrange
        let element = Element::CodeBlock {
            language: Some("rust".to_string()),
        };

        // Act
        let html = ComponentMap::layout()
            .render(&element, html! { "fn main() {}" })
            .into_string();

        // Assert
        assert_eq!(
            html,
            r#"<div class="code-highlight" data-language="rust"><pre><code class="language-rust">fn main() {}</code></pre></div>"#
        );
    }

    #[test]
    fn test_global_image_is_lazy() {
        // Arrange
        let element = Element::Image {
            url: "/cat.png".to_string(),
            title: String::new(),
            alt: "A cat".to_string(),
        };

        // Act
        let html = ComponentMap::global()
            .render(&element, html! {})
            .into_string();

        // Assert
        assert_eq!(html, r#"<img src="/cat.png" alt="A cat" loading="lazy">"#);
    }

    #[test]
    fn test_global_external_link() {
        // Arrange
        let element = Element::Link {
            url: "https://example.com".to_string(),
            title: String::new(),
        };

        // Act
        let html = ComponentMap::global()
            .render(&element, html! { "site" })
            .into_string();

        // Assert
        assert!(html.contains(r#"rel="noopener noreferrer""#), "{}", html);
    }

    #[test]
    fn test_ordered_list_start() {
        // Arrange
        let map = ComponentMap::new();

        // Act
        let from_one = map
            .render(&Element::List { ordered: true, start: 1 }, html! {})
            .into_string();
        let from_three = map
            .render(&Element::List { ordered: true, start: 3 }, html! {})
            .into_string();

        // Assert
        assert_eq!(from_one, "<ol></ol>");
        assert_eq!(from_three, r#"<ol start="3"></ol>"#);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Trim  me  "), "trim-me");
        assert_eq!(slugify("What's new?"), "whats-new");
        assert_eq!(slugify("snake_case and-dash"), "snake-case-and-dash");
        assert_eq!(slugify(""), "");
    }
}
