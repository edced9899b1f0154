//! Site generation from a directory of markdown pages.

use jwalk::WalkDir;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::page::Page;

/// File extensions treated as markdown pages.
const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// Page stem that maps onto its directory's `index.html`.
const INDEX_STEM: &str = "index";

/// Outcome of a site build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Written HTML files
    pub generated: Vec<PathBuf>,
    /// Source pages skipped because they failed to parse or render, or
    /// because an earlier page already claimed their output path
    pub failed: Vec<PathBuf>,
}

/// Renders every markdown page under `content_dir` into `output_dir`.
///
/// Pages that fail to read, parse or render are logged and listed in the
/// report; the build continues with the remaining pages. When two pages map
/// onto the same output file (`blog.md` and `blog/index.md`), the first in
/// sorted order is written and the other is reported as failed.
///
/// # Arguments
///
/// * `content_dir`: Root of the markdown sources
/// * `output_dir`: Destination for generated HTML, created if missing
/// * `layout`: Layout applied to each page
///
/// # Errors
///
/// Returns error if the content directory cannot be walked or an output
/// file or directory cannot be written.
pub fn generate_site(
    content_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    layout: &Layout<'_>,
) -> Result<BuildReport> {
    let content_dir = content_dir.as_ref();
    let output_dir = output_dir.as_ref();

    fs::create_dir_all(output_dir).map_err(|e| Error::io(output_dir, e))?;

    let sources = collect_pages(content_dir)?;
    debug!(count = sources.len(), dir = %content_dir.display(), "collected pages");

    let mut report = BuildReport::default();
    let mut written = HashSet::new();

    for source in sources {
        let relative = source.strip_prefix(content_dir).unwrap_or(&source);
        let target = output_dir.join(output_path(relative));

        if written.contains(&target) {
            warn!(
                page = %source.display(),
                target = %target.display(),
                "skipping page, output already written by another page"
            );
            report.failed.push(source);
            continue;
        }

        let html = match Page::read(&source).and_then(|page| layout.render(&page)) {
            Ok(html) => html,
            Err(e) => {
                warn!(page = %source.display(), error = %e, "skipping page");
                report.failed.push(source);
                continue;
            }
        };

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        fs::write(&target, html.into_string()).map_err(|e| Error::io(&target, e))?;

        info!(page = %target.display(), "generated");
        written.insert(target.clone());
        report.generated.push(target);
    }

    Ok(report)
}

/// Maps a markdown path relative to the content root onto its HTML path.
///
/// `index.md` stays in place as `index.html`; any other page becomes a
/// directory with its own `index.html`, so `blog.md` serves `/blog`.
pub fn output_path(relative: &Path) -> PathBuf {
    let parent = relative.parent().unwrap_or_else(|| Path::new(""));

    match relative.file_stem().and_then(|s| s.to_str()) {
        Some(INDEX_STEM) | None => parent.join("index.html"),
        Some(stem) => parent.join(stem).join("index.html"),
    }
}

/// Lists markdown files below `dir` in sorted order.
///
/// Hidden files and directories are skipped and symbolic links are not
/// followed.
///
/// # Errors
///
/// Returns error if `dir` or one of its subdirectories cannot be read.
pub fn collect_pages(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::metadata(dir).map_err(|e| Error::io(dir, e))?;

    let mut pages = Vec::new();
    for entry in WalkDir::new(dir)
        .skip_hidden(true)
        .follow_links(false)
        .sort(true)
    {
        let entry = entry.map_err(|source| Error::Walk {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = entry.path();
        if entry.file_type().is_file() && is_markdown(&path) {
            pages.push(path);
        }
    }

    pages.sort();
    Ok(pages)
}

/// Checks if file path has a markdown extension, case insensitively.
pub fn is_markdown(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
