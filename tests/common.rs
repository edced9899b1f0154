//! Shared test utilities for integration tests.
//!
//! Provides helpers for laying out temporary site sources: a site metadata
//! file plus a content directory of markdown pages.

#![allow(dead_code)]

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Site metadata used by the integration tests.
pub const SITE_TOML: &str = r#"
title = "Road to Rust"
description = "Notes on systems programming"
author = "Test Author"
keywords = ["rust", "systems"]
"#;

/// Temporary site layout with `site.toml`, `content/` and `dist/` paths.
pub struct TestSite {
    pub dir: TempDir,
}

impl TestSite {
    pub fn site_file(&self) -> PathBuf {
        self.dir.path().join("site.toml")
    }

    pub fn content_dir(&self) -> PathBuf {
        self.dir.path().join("content")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("dist")
    }

    /// Writes a page below the content directory.
    ///
    /// # Errors
    ///
    /// Returns error if directory creation or file write fails
    pub fn page(&self, path: &str, content: &str) -> Result<()> {
        write_file(&self.content_dir(), path, content)
    }
}

/// Creates temporary site with [`SITE_TOML`] and an empty content directory.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn create_test_site() -> Result<TestSite> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("site.toml"), SITE_TOML)?;
    std::fs::create_dir_all(dir.path().join("content"))?;
    Ok(TestSite { dir })
}

/// Writes file below a root, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
