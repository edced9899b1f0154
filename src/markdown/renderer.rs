//! Markdown rendering through a component map.

use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{Arena, Options, parse_document};
use maud::{Markup, PreEscaped, html};
use std::collections::HashMap;

use super::elements::{ComponentMap, Element, slugify};
use super::highlight::{CodeInfo, Highlighter};
use crate::error::Result;

/// What to emit for one AST node.
enum Visit {
    /// Render through the component map with rendered children
    Element(Element),
    /// Highlighted code block, children are not visited
    CodeBlock(Element, CodeInfo, String),
    /// Inline code literal
    Code(String),
    /// Image; alt text replaces children
    Image(Element),
    Text(String),
    Raw(String),
    /// Render children without a wrapper
    Children,
}

/// Renders markdown to HTML with GitHub Flavored Markdown extensions.
///
/// Parses with comrak (tables, strikethrough, autolinks, smart
/// punctuation) and walks the resulting tree, handing every element to the
/// configured [`ComponentMap`]. Raw HTML in the source passes through
/// untouched. Code blocks are highlighted with syntect.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    highlighter: Highlighter,
    components: ComponentMap,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer using the layout and global components.
    pub fn new() -> Self {
        Self::with_components(ComponentMap::provider())
    }

    /// Creates renderer using the given component map.
    pub fn with_components(components: ComponentMap) -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;

        options.parse.smart = true;

        Self {
            options,
            highlighter: Highlighter::new(),
            components,
        }
    }

    pub fn components(&self) -> &ComponentMap {
        &self.components
    }

    /// Renders markdown content to HTML markup.
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting of a code block fails.
    pub fn render(&self, content: &str) -> Result<Markup> {
        let arena = Arena::new();
        let root = parse_document(&arena, content, &self.options);
        self.render_node(root, &mut HeadingIds::default())
    }

    fn render_node<'n>(&self, node: &'n AstNode<'n>, ids: &mut HeadingIds) -> Result<Markup> {
        match classify(node, ids) {
            Visit::Element(element) => {
                let children = self.render_children(node, ids)?;
                Ok(self.components.render(&element, children))
            }
            Visit::CodeBlock(element, info, literal) => {
                let highlighted = self.highlighter.highlight(&literal, &info)?;
                Ok(self.components.render(&element, PreEscaped(highlighted)))
            }
            Visit::Code(literal) => Ok(self.components.render(&Element::Code, html! { (literal) })),
            Visit::Image(element) => Ok(self.components.render(&element, html! {})),
            Visit::Text(text) => Ok(html! { (text) }),
            Visit::Raw(raw) => Ok(PreEscaped(raw)),
            Visit::Children => self.render_children(node, ids),
        }
    }

    fn render_children<'n>(&self, node: &'n AstNode<'n>, ids: &mut HeadingIds) -> Result<Markup> {
        let mut out = String::new();
        for child in node.children() {
            out.push_str(&self.render_node(child, ids)?.into_string());
        }
        Ok(PreEscaped(out))
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Anchor ids already handed out during one render.
///
/// Repeated slugs get a numeric suffix: `intro`, `intro-1`, `intro-2`.
#[derive(Default)]
struct HeadingIds {
    seen: HashMap<String, usize>,
}

impl HeadingIds {
    fn unique(&mut self, text: &str) -> String {
        let slug = slugify(text);
        let count = self.seen.entry(slug.clone()).or_insert(0);
        let id = match *count {
            0 => slug,
            n => format!("{}-{}", slug, n),
        };
        *count += 1;
        id
    }
}

/// Maps a comrak node to what should be emitted for it.
fn classify<'n>(node: &'n AstNode<'n>, ids: &mut HeadingIds) -> Visit {
    let ast = node.data.borrow();
    match &ast.value {
        NodeValue::Paragraph if in_tight_list(node) => Visit::Children,
        NodeValue::Paragraph => Visit::Element(Element::Paragraph),
        NodeValue::Heading(heading) => {
            let text = plain_text(node);
            Visit::Element(Element::Heading {
                level: heading.level,
                id: ids.unique(&text),
                text,
            })
        }
        NodeValue::BlockQuote => Visit::Element(Element::BlockQuote),
        NodeValue::List(list) => Visit::Element(Element::List {
            ordered: list.list_type == ListType::Ordered,
            start: list.start,
        }),
        NodeValue::Item(_) => Visit::Element(Element::ListItem),
        NodeValue::CodeBlock(block) => {
            let info = CodeInfo::parse(&block.info);
            let element = Element::CodeBlock {
                language: info.language.clone(),
            };
            Visit::CodeBlock(element, info, block.literal.clone())
        }
        NodeValue::Code(code) => Visit::Code(code.literal.clone()),
        NodeValue::Emph => Visit::Element(Element::Emphasis),
        NodeValue::Strong => Visit::Element(Element::Strong),
        NodeValue::Strikethrough => Visit::Element(Element::Strikethrough),
        NodeValue::Link(link) => Visit::Element(Element::Link {
            url: link.url.clone(),
            title: link.title.clone(),
        }),
        NodeValue::Image(link) => Visit::Image(Element::Image {
            url: link.url.clone(),
            title: link.title.clone(),
            alt: plain_text(node),
        }),
        NodeValue::ThematicBreak => Visit::Element(Element::ThematicBreak),
        NodeValue::Table(..) => Visit::Element(Element::Table),
        NodeValue::TableRow(header) => Visit::Element(Element::TableRow { header: *header }),
        NodeValue::TableCell => Visit::Element(Element::TableCell {
            header: in_header_row(node),
        }),
        NodeValue::LineBreak => Visit::Element(Element::LineBreak),
        NodeValue::SoftBreak => Visit::Raw("\n".to_string()),
        NodeValue::Text(text) => Visit::Text(text.clone()),
        NodeValue::HtmlBlock(block) => Visit::Raw(block.literal.clone()),
        NodeValue::HtmlInline(raw) => Visit::Raw(raw.clone()),
        _ => Visit::Children,
    }
}

/// Paragraphs directly inside items of a tight list render without `<p>`.
fn in_tight_list<'n>(node: &'n AstNode<'n>) -> bool {
    node.parent()
        .and_then(|item| item.parent())
        .is_some_and(|list| matches!(&list.data.borrow().value, NodeValue::List(l) if l.tight))
}

fn in_header_row<'n>(node: &'n AstNode<'n>) -> bool {
    node.parent()
        .is_some_and(|row| matches!(row.data.borrow().value, NodeValue::TableRow(true)))
}

/// Concatenated text content of a node, used for heading ids and alt text.
fn plain_text<'n>(node: &'n AstNode<'n>) -> String {
    let mut text = String::new();
    for descendant in node.descendants().skip(1) {
        match &descendant.data.borrow().value {
            NodeValue::Text(t) => text.push_str(t),
            NodeValue::Code(code) => text.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
            _ => {}
        }
    }
    text
}
