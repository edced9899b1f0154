//! Static site page layout for markdown content.

pub mod components;
mod config;
mod error;
mod frontmatter;
mod generators;
mod layout;
pub mod markdown;
mod page;
mod site;

pub use components::layout::page_wrapper;
pub use components::metadata::HeadMeta;
pub use components::nav::{NAVIGATION, NavEntry, navigation};
pub use components::theme::{DEFAULT_SYNTAX_THEME, GlobalStyle};
pub use config::Config;
pub use error::{Error, Result};
pub use frontmatter::Frontmatter;
pub use generators::{BuildReport, collect_pages, generate_site, is_markdown, output_path};
pub use layout::Layout;
pub use markdown::{ComponentMap, Element, ElementKind, MarkdownRenderer};
pub use page::Page;
pub use site::SiteMetadata;
