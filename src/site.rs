//! Site wide metadata loaded at build time.

use serde::Deserialize;
use std::path::Path;

use crate::error::{Error, Result};

/// Metadata describing the whole site.
///
/// Every field defaults to empty, so a partially filled `site.toml` still
/// loads and absent values render as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub author: String,
    pub keywords: Vec<String>,
}

impl SiteMetadata {
    /// Parses metadata from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Site`] when the source is not valid TOML or a field
    /// has the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses metadata from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and [`Error::Site`]
    /// when it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&source)
    }
}
