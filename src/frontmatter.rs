//! Per page frontmatter extraction.
//!
//! Pages may open with a `---` block of simple `key: value` lines or a `+++`
//! block of TOML. Only the fields that override site defaults are kept;
//! everything else in the block is ignored.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Page level overrides for site metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Frontmatter {
    pub keywords: Option<Vec<String>>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delimiter {
    Yaml,
    Toml,
}

impl Delimiter {
    fn marker(self) -> &'static str {
        match self {
            Delimiter::Yaml => "---",
            Delimiter::Toml => "+++",
        }
    }
}

impl Frontmatter {
    /// Splits page source into frontmatter and markdown body.
    ///
    /// Returns `None` for the frontmatter when the source does not open with
    /// a delimiter line or the block is never closed; the body is then the
    /// whole input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Frontmatter`] when a `+++` block is not valid TOML.
    pub fn split(content: &str) -> Result<(Option<Frontmatter>, &str)> {
        let Some((block, body, delimiter)) = detect(content) else {
            return Ok((None, content));
        };

        let frontmatter = match delimiter {
            Delimiter::Yaml => parse_yaml_like(block),
            Delimiter::Toml => {
                toml::from_str(block).map_err(|e| Error::Frontmatter(e.to_string()))?
            }
        };

        Ok((Some(frontmatter), body))
    }
}

/// Locates the frontmatter block, returning `(block, body, delimiter)`.
fn detect(content: &str) -> Option<(&str, &str, Delimiter)> {
    let (delimiter, rest) = [Delimiter::Yaml, Delimiter::Toml]
        .into_iter()
        .find_map(|d| opening_line(content, d.marker()).map(|rest| (d, rest)))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == delimiter.marker() {
            let block = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((block, body, delimiter));
        }
        offset += line.len();
    }

    None
}

fn opening_line<'a>(content: &'a str, marker: &str) -> Option<&'a str> {
    let rest = content.strip_prefix(marker)?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

/// Parses `key: value` lines.
///
/// `keywords` accepts `a, b`, `[a, b]`, or a following block of `- item`
/// lines. A bare `keywords:` with no items counts as absent.
fn parse_yaml_like(block: &str) -> Frontmatter {
    let mut frontmatter = Frontmatter::default();
    let mut pending: Option<Vec<String>> = None;

    for line in block.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(item) = line.strip_prefix("- ") {
            if let Some(items) = pending.as_mut() {
                items.push(unquote(item.trim()).to_string());
            }
            continue;
        }

        if let Some(items) = pending.take().filter(|items| !items.is_empty()) {
            frontmatter.keywords = Some(items);
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();

        match key.trim().to_lowercase().as_str() {
            "keywords" if value.is_empty() => pending = Some(Vec::new()),
            "keywords" => frontmatter.keywords = Some(parse_list(value)),
            "description" => frontmatter.description = Some(unquote(value).to_string()),
            _ => {}
        }
    }

    if let Some(items) = pending.filter(|items| !items.is_empty()) {
        frontmatter.keywords = Some(items);
    }

    frontmatter
}

fn parse_list(value: &str) -> Vec<String> {
    let value = unquote(value);
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(value);

    inner
        .split(',')
        .map(|item| unquote(item.trim()))
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// Strips one pair of matching quotes. `"a", "b"` is left alone.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2
            && let Some(inner) = value
                .strip_prefix(quote)
                .and_then(|v| v.strip_suffix(quote))
            && !inner.contains(quote)
        {
            return inner;
        }
    }
    value
}
