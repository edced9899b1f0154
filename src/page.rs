//! Markdown source pages.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::frontmatter::Frontmatter;

/// A markdown page split into frontmatter and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    source_path: PathBuf,
    frontmatter: Option<Frontmatter>,
    body: String,
}

impl Page {
    /// Builds a page from already loaded source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Frontmatter`] if the frontmatter block is malformed.
    pub fn parse(source_path: impl Into<PathBuf>, content: &str) -> Result<Self> {
        let (frontmatter, body) = Frontmatter::split(content)?;
        Ok(Self {
            source_path: source_path.into(),
            frontmatter,
            body: body.to_string(),
        })
    }

    /// Reads and parses a page from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or the error from
    /// [`Page::parse`].
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(path, &content)
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn frontmatter(&self) -> Option<&Frontmatter> {
        self.frontmatter.as_ref()
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
