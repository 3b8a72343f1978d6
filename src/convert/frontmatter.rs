//! Split Hexo documents and rewrite their front matter for Astro.
//!
//! Front matter is handled line by line rather than through a YAML parser so
//! that untouched entries, quoting and list indentation survive byte for byte.

/// Delimiter that opens and closes the front matter block.
pub const MARKER: &str = "---";

/// Keys Astro has no use for; dropped together with their continuation lines.
const REMOVED_KEYS: &[&str] = &["mathjax", "categories"];

const PUB_DATETIME_KEY: &str = "pubDatetime";
const MOD_DATETIME_KEY: &str = "modDatetime";

/// A document cut at the first two front matter markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitDocument<'a> {
    /// Text between the first and second marker, trimmed.
    pub metadata: &'a str,
    /// Everything after the second marker, trimmed.
    pub body: &'a str,
}

/// Split `content` on the first two occurrences of [`MARKER`].
///
/// Anything before the first marker is discarded. Returns `None` when the
/// marker occurs fewer than two times, in which case the document is left
/// alone by the converter.
pub fn split_document(content: &str) -> Option<SplitDocument<'_>> {
    let mut parts = content.splitn(3, MARKER);
    let _preamble = parts.next()?;
    let metadata = parts.next()?;
    let body = parts.next()?;
    Some(SplitDocument {
        metadata: metadata.trim(),
        body: body.trim(),
    })
}

/// First line of a front matter entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryHead<'a> {
    /// `key: value`, split at the first colon. `line` is the trimmed source line.
    Field {
        key: &'a str,
        value: &'a str,
        line: &'a str,
    },
    /// A line with no colon that does not continue a previous entry.
    /// Emitted unchanged.
    Verbatim(&'a str),
}

/// One entry of the front matter block plus the indented lines that belong to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataEntry<'a> {
    pub head: EntryHead<'a>,
    /// Continuation lines exactly as they appeared in the source.
    pub continuation: Vec<&'a str>,
}

impl<'a> MetadataEntry<'a> {
    fn new(head: EntryHead<'a>) -> Self {
        Self {
            head,
            continuation: Vec::new(),
        }
    }

    /// Key of a `key: value` entry.
    #[cfg(test)]
    pub fn key(&self) -> Option<&'a str> {
        match self.head {
            EntryHead::Field { key, .. } => Some(key),
            EntryHead::Verbatim(_) => None,
        }
    }
}

/// A line continues the previous entry iff it is non-blank and starts with whitespace.
fn is_continuation(raw: &str) -> bool {
    raw.starts_with(char::is_whitespace) && !raw.trim().is_empty()
}

/// Parse a front matter block into entries, in source order.
///
/// Blank lines are dropped. An indented line before any entry is read as
/// an entry of its own.
pub fn parse_metadata(block: &str) -> Vec<MetadataEntry<'_>> {
    let mut entries: Vec<MetadataEntry<'_>> = Vec::new();

    for raw in block.split('\n') {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if is_continuation(raw) {
            if let Some(owner) = entries.last_mut() {
                owner.continuation.push(raw);
                continue;
            }
        }

        let head = match line.split_once(':') {
            Some((key, value)) => EntryHead::Field {
                key: key.trim(),
                value: value.trim(),
                line,
            },
            None => EntryHead::Verbatim(line),
        };
        entries.push(MetadataEntry::new(head));
    }

    entries
}

/// Apply the Hexo to Astro key rules and render the surviving entries as lines.
///
/// - `mathjax` and `categories` are removed
/// - `date` becomes `pubDatetime`
/// - `update` and `updated` become `modDatetime`
///
/// Renamed entries keep their value as is. Every other entry is emitted
/// unchanged, followed by its continuation lines.
pub fn rewrite_metadata(entries: &[MetadataEntry<'_>]) -> Vec<String> {
    let mut lines = Vec::with_capacity(entries.len());

    for entry in entries {
        match entry.head {
            EntryHead::Field { key, .. } if REMOVED_KEYS.contains(&key) => continue,
            EntryHead::Field {
                key: "date", value, ..
            } => lines.push(format!("{PUB_DATETIME_KEY}: {value}")),
            EntryHead::Field {
                key: "update" | "updated",
                value,
                ..
            } => lines.push(format!("{MOD_DATETIME_KEY}: {value}")),
            EntryHead::Field { line, .. } | EntryHead::Verbatim(line) => {
                lines.push(line.to_string());
            }
        }
        lines.extend(entry.continuation.iter().map(ToString::to_string));
    }

    lines
}
