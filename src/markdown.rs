//! Markdown rendering through presentational components.
//!
//! Markdown is parsed with comrak and every document element is rendered by
//! a component looked up in a [`ComponentMap`]. Code blocks are highlighted
//! with syntect and may mark individual lines.

mod elements;
mod highlight;
mod renderer;

pub use elements::{Component, ComponentMap, Element, ElementKind, slugify, standard};
pub use highlight::{CodeInfo, HIGHLIGHT_LINE_CLASS, Highlighter, LineRanges};
pub use renderer::MarkdownRenderer;
