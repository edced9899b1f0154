//! Library error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading inputs and rendering pages.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: jwalk::Error,
    },

    #[error("invalid site metadata: {0}")]
    Site(#[from] toml::de::Error),

    #[error("invalid frontmatter: {0}")]
    Frontmatter(String),

    #[error("unknown syntax theme: {0}")]
    Theme(String),

    #[error("syntax highlighting failed: {0}")]
    Highlight(#[from] syntect::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
