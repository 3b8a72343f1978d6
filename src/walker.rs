//! Document discovery under an input root
//!
//! Walks the input tree recursively and yields every regular file whose
//! name ends with the requested extension, together with its path relative
//! to the root so that output trees can mirror the input layout.
//!
//! Entries are sorted by file name within each directory, so two runs over
//! the same tree always visit files in the same order regardless of how the
//! file system enumerates them.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{self, MigrateError, Result};

/// A document found under the input root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// Path as reached from the walk root (absolute if the root was)
    pub absolute_path: PathBuf,
    /// Path relative to the walk root, including the file name
    pub relative_path: PathBuf,
}

impl WalkedFile {
    /// File name with the matched extension removed.
    pub fn stem(&self, ext: &str) -> Option<&str> {
        let name = self.relative_path.file_name()?.to_str()?;
        strip_extension(name, ext)
    }
}

/// Check that an extension is usable as a filter: `md`, not `.md` or empty.
pub fn validate_extension(ext: &str) -> Result<()> {
    if ext.is_empty() || ext.starts_with('.') || ext.contains(['/', '\\']) {
        return Err(MigrateError::InvalidExtension {
            ext: ext.to_string(),
        });
    }
    Ok(())
}

/// Strip `.{ext}` from a file name, or `None` when the name does not end with it.
pub fn strip_extension<'a>(name: &'a str, ext: &str) -> Option<&'a str> {
    name.strip_suffix(ext)?.strip_suffix('.')
}

fn matches_extension(entry: &DirEntry, ext: &str) -> bool {
    entry.file_type().is_file()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| strip_extension(name, ext).is_some())
}

/// Lazily enumerate every `*.{ext}` file below `root`.
///
/// Calling this again restarts the walk from the beginning. Errors raised
/// while reading a directory are yielded as items; the caller decides
/// whether to abort.
pub fn walk_documents<'a>(
    root: &'a Path,
    ext: &'a str,
) -> Result<impl Iterator<Item = Result<WalkedFile>> + 'a> {
    if !root.is_dir() {
        return Err(error::input_dir_not_found(root));
    }

    let iter = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) if matches_extension(&entry, ext) => Some(to_walked_file(root, &entry)),
            Ok(_) => None,
            Err(err) => Some(Err(MigrateError::from(err))),
        });

    Ok(iter)
}

fn to_walked_file(root: &Path, entry: &DirEntry) -> Result<WalkedFile> {
    let relative_path = entry
        .path()
        .strip_prefix(root)
        .map_err(|e| error::walk_failed(entry.path(), e))?
        .to_path_buf();
    Ok(WalkedFile {
        absolute_path: entry.path().to_path_buf(),
        relative_path,
    })
}
