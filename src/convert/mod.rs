//! Hexo to Astro post conversion
//!
//! [`convert_document`] is the pure transformation of one post. The
//! [`batch`] module applies it to a directory tree and mirrors the results
//! into an output directory.

pub mod batch;
mod excerpt;
mod frontmatter;

pub use batch::{ConvertSummary, convert_tree};
use excerpt::{extract_description, strip_more_marker};
use frontmatter::{MARKER, parse_metadata, rewrite_metadata, split_document};

/// Outcome of converting one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// The converted document text
    Converted(String),
    /// The document has no front matter block; nothing is written for it
    Skipped,
}

/// Convert one Hexo post to Astro.
///
/// The front matter keys are rewritten, a `description` taken from the
/// teaser is appended when the post has a more marker, and the marker line
/// is dropped from the body.
pub fn convert_document(content: &str) -> Conversion {
    let Some(document) = split_document(content) else {
        return Conversion::Skipped;
    };

    let mut metadata = rewrite_metadata(&parse_metadata(document.metadata));
    let body = match extract_description(content) {
        Some(description) => {
            metadata.push(format!("description: {description}"));
            strip_more_marker(document.body)
        }
        None => document.body.to_string(),
    };

    Conversion::Converted(format!(
        "{MARKER}\n{}\n{MARKER}\n{body}",
        metadata.join("\n")
    ))
}

#[cfg(test)]
mod tests {
    use super::excerpt::MORE_MARKER;
    use super::*;

    fn converted(content: &str) -> String {
        match convert_document(content) {
            Conversion::Converted(text) => text,
            Conversion::Skipped => panic!("Expected document to convert"),
        }
    }

    #[test]
    fn test_full_post() {
        let input = "---\ndate: 2020-01-01\nmathjax: true\ntags:\n  - x\n---\nIntro line.\n\n<!-- more -->\n\nRest of body.\n";
        assert_eq!(
            converted(input),
            "---\npubDatetime: 2020-01-01\ntags:\n  - x\ndescription: Intro line.\n---\nIntro line.\n\nRest of body."
        );
    }

    #[test]
    fn test_without_front_matter_is_skipped() {
        assert_eq!(convert_document("# Title\n\nNo metadata."), Conversion::Skipped);
        assert_eq!(convert_document("---\ntitle: unterminated"), Conversion::Skipped);
    }

    #[test]
    fn test_without_more_marker_body_passes_through() {
        let input = "---\ntitle: Plain\n---\n\nFirst.\n\n\nSecond <!-- more --> inline.\n";
        assert_eq!(
            converted(input),
            "---\ntitle: Plain\n---\nFirst.\n\n\nSecond <!-- more --> inline."
        );
    }

    #[test]
    fn test_description_is_last_metadata_line() {
        let output = converted("---\ntitle: T\nupdated: 2021-01-01\n---\nTeaser\n<!-- more -->\nMore");
        let metadata: Vec<&str> = output.lines().skip(1).take_while(|l| *l != MARKER).collect();
        assert_eq!(
            metadata,
            vec!["title: T", "modDatetime: 2021-01-01", "description: Teaser"]
        );
    }

    #[test]
    fn test_only_first_marker_removed() {
        let output = converted("---\na: 1\n---\nOne\n\n<!-- more -->\n\nTwo\n\n<!-- more -->\n\nThree");
        assert_eq!(output.matches(MORE_MARKER).count(), 1);
        assert!(output.ends_with("One\n\nTwo\n\n<!-- more -->\n\nThree"));
    }

    fn assert_one_marker_removed(input: &str, expected: &str) {
        let output = converted(input);
        assert_eq!(output, expected);
        assert_eq!(output.matches("description:").count(), 1);
        assert_eq!(
            input.matches(MORE_MARKER).count() - output.matches(MORE_MARKER).count(),
            1
        );
    }

    #[test]
    fn test_marker_on_last_body_line() {
        assert_one_marker_removed(
            "---\ntitle: t\n---\nTeaser.\n\n<!-- more -->\n",
            "---\ntitle: t\ndescription: Teaser.\n---\nTeaser.",
        );
    }

    #[test]
    fn test_marker_on_first_body_line() {
        assert_one_marker_removed(
            "---\ntitle: t\n---\n\n<!-- more -->\nRest.\n",
            "---\ntitle: t\ndescription: \n---\nRest.",
        );
    }

    #[test]
    fn test_marker_with_trailing_text_is_left_alone() {
        let input = "---\ntitle: t\n---\nTeaser.\n<!-- more --> tail\nRest.";
        assert_eq!(
            converted(input),
            "---\ntitle: t\n---\nTeaser.\n<!-- more --> tail\nRest."
        );
    }

    #[test]
    fn test_marker_with_trailing_text_before_real_marker() {
        assert_one_marker_removed(
            "---\ntitle: t\n---\nTeaser.\n<!-- more --> tail\n<!-- more -->\nRest.",
            "---\ntitle: t\ndescription: Teaser.\n---\nTeaser.\n<!-- more --> tail\n\nRest.",
        );
    }

    #[test]
    fn test_empty_front_matter() {
        assert_eq!(converted("---\n---\nBody"), "---\n\n---\nBody");
    }

    #[test]
    fn test_removed_keys_never_emitted() {
        let output = converted("---\ncategories: [a]\nmathjax: false\ntitle: t\n---\nx");
        assert!(!output.contains("categories"));
        assert!(!output.contains("mathjax"));
        assert!(output.contains("title: t"));
    }
}
