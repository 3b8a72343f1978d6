//! Error types and handling for hexo2astro
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! - [`fs`]: File system errors
//!
//! A document that does not split into front matter and body is not an
//! error: the converter reports it as [`crate::convert::Conversion::Skipped`].

pub mod fs;

pub use fs::{
    dir_create_failed, input_dir_not_found, read_failed as file_read_failed,
    walk_failed, write_failed as file_write_failed,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for migration runs
#[derive(Error, Diagnostic, Debug)]
pub enum MigrateError {
    #[error("Input directory not found: {path}")]
    #[diagnostic(
        code(hexo2astro::fs::input_not_found),
        help("Pass the Hexo source directory with --input (defaults to ./input)")
    )]
    InputDirNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(hexo2astro::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(hexo2astro::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(hexo2astro::fs::dir_create_failed))]
    DirCreateFailed { path: String, reason: String },

    #[error("Failed to walk directory: {path}: {reason}")]
    #[diagnostic(code(hexo2astro::fs::walk_failed))]
    WalkFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(hexo2astro::fs::io_error))]
    IoError { message: String },

    #[error("Invalid file extension: '{ext}'")]
    #[diagnostic(
        code(hexo2astro::cli::invalid_extension),
        help("Pass the extension without a leading dot, e.g. --ext md")
    )]
    InvalidExtension { ext: String },
}

impl From<std::io::Error> for MigrateError {
    fn from(err: std::io::Error) -> Self {
        MigrateError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for MigrateError {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        MigrateError::WalkFailed {
            path,
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MigrateError>;
