//! Teaser handling: derive a description from the text above `<!-- more -->`
//! and drop the marker from the body.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

use super::frontmatter::MARKER;

/// Hexo's excerpt separator.
pub const MORE_MARKER: &str = "<!-- more -->";

/// Front matter, then the teaser (captured), then a line holding only the more marker.
static DESCRIPTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let marker = regex::escape(MARKER);
    let more = regex::escape(MORE_MARKER);
    Regex::new(&format!(
        r"(?s){marker}\s*\n.*?\n{marker}\s*\n(.*?)\n\s*{more}[ \t]*(?:\n|\z)"
    ))
    .expect("description pattern is valid")
});

/// A line holding only the more marker, with the blank lines around it.
/// Also matches on the first or last line of the text.
static MORE_LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let more = regex::escape(MORE_MARKER);
    Regex::new(&format!(r"(?:\A|\n)\s*{more}[ \t]*(?:\s*\n|\z)"))
        .expect("more marker pattern is valid")
});

/// Extract the description from a whole document.
///
/// Returns the trimmed first line of the teaser, or `None` when the
/// document has no more marker after its front matter.
pub fn extract_description(content: &str) -> Option<String> {
    let captures = DESCRIPTION_PATTERN.captures(content)?;
    let teaser = captures.get(1)?.as_str().trim();
    let first_line = teaser.lines().next().unwrap_or_default();
    Some(first_line.trim().to_string())
}

/// Remove the first line-isolated more marker from a trimmed `body`.
///
/// Blank lines around the marker collapse into a single one. A marker on
/// the first or last line leaves no blank line behind.
pub fn strip_more_marker(body: &str) -> String {
    let Some(found) = MORE_LINE_PATTERN.find(body) else {
        return body.to_string();
    };
    let before = &body[..found.start()];
    let after = &body[found.end()..];
    if before.is_empty() {
        after.to_string()
    } else if after.is_empty() {
        before.to_string()
    } else {
        format!("{before}\n\n{after}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_is_first_teaser_line() {
        let content = "---\ntitle: t\n---\nFirst line.\nSecond line.\n\n<!-- more -->\nrest";
        assert_eq!(extract_description(content).as_deref(), Some("First line."));
    }

    #[test]
    fn test_description_is_trimmed() {
        let content = "---\ntitle: t\n---\n\n   Padded intro.   \n<!-- more -->\n";
        assert_eq!(extract_description(content).as_deref(), Some("Padded intro."));
    }

    #[test]
    fn test_no_marker_no_description() {
        let content = "---\ntitle: t\n---\nJust a post.\n";
        assert!(extract_description(content).is_none());
    }

    #[test]
    fn test_marker_must_start_its_own_line() {
        let content = "---\ntitle: t\n---\nInline <!-- more --> marker\n";
        assert!(extract_description(content).is_none());
    }

    #[test]
    fn test_description_stops_at_first_marker() {
        let content = "---\na: 1\n---\nOne\n<!-- more -->\nTwo\n<!-- more -->\n";
        assert_eq!(extract_description(content).as_deref(), Some("One"));
    }

    #[test]
    fn test_strip_collapses_padding_to_one_blank_line() {
        assert_eq!(
            strip_more_marker("Intro.\n\n\n  <!-- more -->  \n\n\nRest."),
            "Intro.\n\nRest."
        );
    }

    #[test]
    fn test_strip_removes_only_first_marker() {
        assert_eq!(
            strip_more_marker("A\n<!-- more -->\nB\n<!-- more -->\nC"),
            "A\n\nB\n<!-- more -->\nC"
        );
    }

    #[test]
    fn test_marker_line_with_trailing_text_is_not_a_marker() {
        let content = "---\ntitle: t\n---\nTeaser.\n<!-- more --> tail\nRest.";
        assert!(extract_description(content).is_none());
        let body = "Teaser.\n<!-- more --> tail\nRest.";
        assert_eq!(strip_more_marker(body), body);
    }

    #[test]
    fn test_description_allows_marker_on_last_line() {
        let content = "---\ntitle: t\n---\nTeaser.\n\n<!-- more -->";
        assert_eq!(extract_description(content).as_deref(), Some("Teaser."));
    }

    #[test]
    fn test_strip_marker_on_last_line() {
        assert_eq!(strip_more_marker("Teaser.\n\n<!-- more -->"), "Teaser.");
    }

    #[test]
    fn test_strip_marker_on_first_line() {
        assert_eq!(strip_more_marker("<!-- more -->\n\nRest."), "Rest.");
    }

    #[test]
    fn test_strip_keeps_indentation_of_next_line() {
        assert_eq!(
            strip_more_marker("Intro.\n<!-- more -->\n\n    code"),
            "Intro.\n\n    code"
        );
    }

    #[test]
    fn test_strip_leaves_body_without_marker_alone() {
        let body = "Nothing\n\nto see.";
        assert_eq!(strip_more_marker(body), body);
    }
}
