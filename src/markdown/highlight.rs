//! Code block highlighting with syntect.

use maud::html;
use std::ops::RangeInclusive;
use syntect::html::ClassedHTMLGenerator;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::components::theme::HIGHLIGHT_CLASS_STYLE;
use crate::error::Result;

/// Class wrapped around each emphasised line.
pub const HIGHLIGHT_LINE_CLASS: &str = "highlight-code-line";

/// Parsed code fence info string.
///
/// `rust{2,4-5}` names the language `rust` and marks lines 2, 4 and 5.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeInfo {
    pub language: Option<String>,
    pub lines: LineRanges,
}

/// One-based line ranges marked for emphasis.
///
/// Kept as ranges so that a huge range costs no more than a small one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineRanges(Vec<RangeInclusive<usize>>);

impl LineRanges {
    pub fn contains(&self, line: usize) -> bool {
        self.0.iter().any(|range| range.contains(&line))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Marked line numbers up to and including `last`, in ascending order.
    pub fn lines_up_to(&self, last: usize) -> Vec<usize> {
        (1..=last).filter(|line| self.contains(*line)).collect()
    }
}

impl<const N: usize> From<[RangeInclusive<usize>; N]> for LineRanges {
    fn from(ranges: [RangeInclusive<usize>; N]) -> Self {
        Self(ranges.into())
    }
}

impl CodeInfo {
    pub fn parse(info: &str) -> Self {
        let info = info.trim();
        let (head, ranges) = match info.find('{') {
            Some(open) => {
                let ranges = info[open..]
                    .find('}')
                    .map(|close| &info[open + 1..open + close]);
                (&info[..open], ranges)
            }
            None => (info, None),
        };

        Self {
            language: head.split_whitespace().next().map(String::from),
            lines: ranges.map(parse_ranges).unwrap_or_default(),
        }
    }
}

/// Parses `1,3-5` into line ranges. Malformed parts, empty ranges and line
/// zero are skipped.
fn parse_ranges(ranges: &str) -> LineRanges {
    let mut lines = Vec::new();

    for part in ranges.split(',').map(str::trim) {
        let bounds = match part.split_once('-') {
            Some((start, end)) => start
                .trim()
                .parse::<usize>()
                .ok()
                .zip(end.trim().parse::<usize>().ok()),
            None => part.parse::<usize>().ok().map(|line| (line, line)),
        };

        if let Some((start, end)) = bounds {
            let start = start.max(1);
            if start <= end {
                lines.push(start..=end);
            }
        }
    }

    LineRanges(lines)
}

/// Highlights code blocks into class annotated HTML.
pub struct Highlighter {
    syntax_set: SyntaxSet,
}

impl Highlighter {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Highlights code and wraps the lines marked in `info`.
    ///
    /// # Errors
    ///
    /// Returns error if syntect fails on a line.
    pub fn highlight(&self, code: &str, info: &CodeInfo) -> Result<String> {
        let html = self.highlight_code(code, info.language.as_deref())?;
        Ok(mark_lines(&html, &info.lines))
    }

    /// Highlights code with syntect using CSS classes.
    ///
    /// Falls back to escaped plain text when the language is missing or
    /// unknown.
    fn highlight_code(&self, code: &str, language: Option<&str>) -> Result<String> {
        if code.is_empty() {
            return Ok(String::new());
        }

        let syntax = language.and_then(|language| {
            self.syntax_set
                .find_syntax_by_token(language)
                .or_else(|| self.syntax_set.find_syntax_by_extension(language))
        });

        let Some(syntax) = syntax else {
            return Ok(html! { (code) }.into_string());
        };

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, HIGHLIGHT_CLASS_STYLE);

        for line in LinesWithEndings::from(code) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }

        Ok(generator.finalize())
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps marked lines of highlighted HTML in a block span.
///
/// Token spans may cross line breaks, so spans still open at the end of a
/// line are closed there and reopened at the start of the next one. This
/// keeps every wrapper properly nested.
fn mark_lines(html: &str, marked: &LineRanges) -> String {
    if marked.is_empty() {
        return html.to_string();
    }

    let mut out = String::with_capacity(html.len() + 64);
    let mut open: Vec<&str> = Vec::new();

    for (index, line) in html.split_inclusive('\n').enumerate() {
        let (content, newline) = match line.strip_suffix('\n') {
            Some(content) => (content, "\n"),
            None => (line, ""),
        };
        let highlighted = marked.contains(index + 1);

        if highlighted {
            out.push_str("<span class=\"");
            out.push_str(HIGHLIGHT_LINE_CLASS);
            out.push_str("\">");
        }
        for tag in &open {
            out.push_str(tag);
        }

        track_spans(content, &mut open);
        out.push_str(content);

        for _ in &open {
            out.push_str("</span>");
        }
        out.push_str(newline);
        if highlighted {
            out.push_str("</span>");
        }
    }

    out
}

/// Updates the stack of open `<span ...>` tags after a chunk of HTML.
fn track_spans<'a>(content: &'a str, open: &mut Vec<&'a str>) {
    let mut rest = content;
    while let Some(pos) = rest.find('<') {
        let tail = &rest[pos..];
        if let Some(after) = tail.strip_prefix("</span>") {
            open.pop();
            rest = after;
        } else if tail.starts_with("<span") {
            let end = tail.find('>').map_or(tail.len(), |e| e + 1);
            open.push(&tail[..end]);
            rest = &tail[end..];
        } else {
            rest = &tail[1..];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_info_language_only() {
        // Arrange & Act
        let info = CodeInfo::parse("rust");

        // Assert
        assert_eq!(info.language.as_deref(), Some("rust"));
        assert!(info.lines.is_empty());
    }

    #[test]
    fn test_parse_info_with_ranges() {
        // Arrange & Act
        let info = CodeInfo::parse("javascript{1,4-6}");

        // Assert
        assert_eq!(info.language.as_deref(), Some("javascript"));
        assert_eq!(info.lines.lines_up_to(10), vec![1, 4, 5, 6]);
    }

    #[test]
    fn test_parse_info_skips_malformed_ranges() {
        // Arrange & Act
        let info = CodeInfo::parse("py { 0, 3-2, x, 2 }");

        // Assert
        assert_eq!(info.language.as_deref(), Some("py"));
        assert_eq!(info.lines.lines_up_to(10), vec![2]);
    }

    #[test]
    fn test_parse_info_huge_range_is_not_expanded() {
        // Arrange & Act
        let info = CodeInfo::parse(&format!("rust{{1-{}}}", usize::MAX));

        // Assert
        assert!(info.lines.contains(1));
        assert!(info.lines.contains(usize::MAX));
        assert_eq!(info.lines, LineRanges::from([1..=usize::MAX]));
    }

    #[test]
    fn test_huge_range_marks_only_existing_lines() {
        // Arrange
        let highlighter = Highlighter::new();
        let info = CodeInfo::parse(&format!("nolang{{2-{}}}", usize::MAX));

        // Act
        let html = highlighter
            .highlight("one\ntwo\nthree\n", &info)
            .expect("Should highlight");

        // Assert
        assert_eq!(html.matches(HIGHLIGHT_LINE_CLASS).count(), 2, "{}", html);
        assert!(html.starts_with("one\n"), "{}", html);
    }

    #[test]
    fn test_parse_empty_info() {
        // Arrange & Act
        let info = CodeInfo::parse("");

        // Assert
        assert_eq!(info, CodeInfo::default());
    }

    #[test]
    fn test_unknown_language_is_escaped_text() {
        // Arrange
        let highlighter = Highlighter::new();
        let info = CodeInfo::parse("unknownlang");

        // Act
        let html = highlighter
            .highlight("a < b && c\n", &info)
            .expect("Should highlight");

        // Assert
        assert_eq!(html, "a &lt; b &amp;&amp; c\n");
    }

    #[test]
    fn test_known_language_uses_classes() {
        // Arrange
        let highlighter = Highlighter::new();
        let info = CodeInfo::parse("rust");

        // Act
        let html = highlighter
            .highlight("fn main() {}\n", &info)
            .expect("Should highlight");

        // Assert
        assert!(html.contains("<span class=\"hl-"), "Should use hl- classes: {}", html);
        assert!(html.contains("main"));
    }

    #[test]
    fn test_mark_lines_wraps_selected_lines() {
        // Arrange
        let marked = LineRanges::from([2..=2]);

        // Act
        let html = mark_lines("one\ntwo\nthree\n", &marked);

        // Assert
        assert_eq!(
            html,
            "one\n<span class=\"highlight-code-line\">two\n</span>three\n"
        );
    }

    #[test]
    fn test_mark_lines_reopens_crossing_spans() {
        // Arrange
        let html = "<span class=\"c\">/* a\nb */</span>\nx\n";
        let marked = LineRanges::from([2..=2]);

        // Act
        let out = mark_lines(html, &marked);

        // Assert
        assert_eq!(
            out,
            "<span class=\"c\">/* a</span>\n\
             <span class=\"highlight-code-line\"><span class=\"c\">b */</span>\n</span>\
             x\n"
        );
    }

    #[test]
    fn test_marked_lines_with_highlighting_stay_balanced() {
        // Arrange
        let highlighter = Highlighter::new();
        let info = CodeInfo::parse("rust{2}");
        let code = "/* multi\nline */\nfn main() {}\n";

        // Act
        let html = highlighter.highlight(code, &info).expect("Should highlight");

        // Assert
        assert_eq!(html.matches(HIGHLIGHT_LINE_CLASS).count(), 1);
        assert_eq!(
            html.matches("<span").count(),
            html.matches("</span>").count(),
            "Spans should be balanced: {}",
            html
        );
    }
}
