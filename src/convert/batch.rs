//! Convert a whole input tree into a mirrored output tree.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{Conversion, convert_document};
use crate::error::{self, Result};
use crate::progress::ProgressReporter;
use crate::walker::{WalkedFile, walk_documents};

/// Totals for one conversion run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Documents that were converted (or would be, on a dry run)
    pub converted: usize,
    /// Documents without front matter; nothing was written for them
    pub skipped: usize,
    /// Output paths of converted documents, in walk order
    pub outputs: Vec<PathBuf>,
}

/// Read `file`, convert it and write the result under `output_root`.
///
/// The output keeps the file's path relative to the input root. Parent
/// directories are created as needed. Skipped documents leave no trace in
/// the output tree. With `dry_run` nothing is written.
pub fn convert_file(file: &WalkedFile, output_root: &Path, dry_run: bool) -> Result<Conversion> {
    let content = fs::read_to_string(&file.absolute_path)
        .map_err(|e| error::file_read_failed(&file.absolute_path, e))?;
    let content = content.replace("\r\n", "\n");

    let conversion = convert_document(&content);
    if let Conversion::Converted(ref text) = conversion {
        let target = output_root.join(&file.relative_path);
        if dry_run {
            debug!(path = %target.display(), "would write document");
        } else {
            write_document(&target, text)?;
            debug!(path = %target.display(), "wrote document");
        }
    } else {
        debug!(path = %file.relative_path.display(), "skipped document without front matter");
    }

    Ok(conversion)
}

fn write_document(target: &Path, text: &str) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| error::dir_create_failed(parent, e))?;
    }
    fs::write(target, text).map_err(|e| error::file_write_failed(target, e))
}

/// Convert every `*.{ext}` document below `input` into `output`.
///
/// The first I/O failure aborts the run.
pub fn convert_tree(
    input: &Path,
    output: &Path,
    ext: &str,
    dry_run: bool,
    reporter: &mut dyn ProgressReporter,
) -> Result<ConvertSummary> {
    let files = walk_documents(input, ext)?.collect::<Result<Vec<_>>>()?;
    info!(
        input = %input.display(),
        output = %output.display(),
        documents = files.len(),
        "converting documents"
    );

    reporter.start(files.len() as u64);
    let mut summary = ConvertSummary::default();

    for file in &files {
        let conversion = match convert_file(file, output, dry_run) {
            Ok(conversion) => conversion,
            Err(err) => {
                reporter.abandon();
                return Err(err);
            }
        };
        match conversion {
            Conversion::Converted(_) => {
                summary.converted += 1;
                summary.outputs.push(output.join(&file.relative_path));
            }
            Conversion::Skipped => summary.skipped += 1,
        }
        reporter.advance(&file.relative_path.to_string_lossy());
    }

    reporter.finish();
    Ok(summary)
}
