//! Redirect table from old Hexo permalinks to Astro post routes.
//!
//! Each document `hello.md` yields the entry `"/hello": "/posts/hello"`.
//! The table is sorted by the rendered entry and written as comma-separated
//! lines, ready to paste into the `redirects` map of an Astro config.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{self, Result};
use crate::walker::walk_documents;

/// Route prefix of posts on the Astro side
pub const DEFAULT_PREFIX: &str = "/posts/";

/// One redirect: old slug to new post route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub source: String,
    pub target: String,
}

impl RouteEntry {
    /// Build the entry for a document whose file name without extension is `slug`.
    pub fn from_slug(slug: &str, prefix: &str) -> Self {
        Self {
            source: format!("/{slug}"),
            target: format!("{prefix}{slug}"),
        }
    }

    /// Render as `"source": "target"`.
    pub fn render(&self) -> String {
        format!("{}: {}", quote(&self.source), quote(&self.target))
    }
}

/// Quote as a JSON string literal so odd slugs stay well-formed.
fn quote(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{value}\""))
}

/// Sorted set of redirect entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build a table, ordering entries by their rendered form.
    pub fn from_entries(entries: impl IntoIterator<Item = RouteEntry>) -> Self {
        let mut entries: Vec<RouteEntry> = entries.into_iter().collect();
        entries.sort_by_cached_key(RouteEntry::render);
        Self { entries }
    }

    /// Collect one entry per `*.{ext}` document below `root`.
    ///
    /// Only the file name is used, so posts with the same name in different
    /// directories produce duplicate entries; a warning is logged for each.
    pub fn collect(root: &Path, ext: &str, prefix: &str) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for file in walk_documents(root, ext)? {
            let file = file?;
            let slug = file.stem(ext).ok_or_else(|| {
                error::walk_failed(&file.absolute_path, "file name is not valid UTF-8")
            })?;
            if !seen.insert(slug.to_string()) {
                warn!(slug, path = %file.relative_path.display(), "duplicate route slug");
            }
            debug!(slug, "route entry");
            entries.push(RouteEntry::from_slug(slug, prefix));
        }

        Ok(Self::from_entries(entries))
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render one entry per line, every line but the last ending in a comma.
    /// An empty table renders as an empty string.
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let lines: Vec<String> = self.entries.iter().map(RouteEntry::render).collect();
        format!("{}\n", lines.join(",\n"))
    }

    /// Write the rendered table to `path`, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| error::dir_create_failed(parent, e))?;
        }
        fs::write(path, self.render()).map_err(|e| error::file_write_failed(path, e))
    }
}
