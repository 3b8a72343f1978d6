//! File system errors

use std::path::Path;

use super::MigrateError;

/// Creates an input-directory-missing error
pub fn input_dir_not_found(path: impl AsRef<Path>) -> MigrateError {
    MigrateError::InputDirNotFound {
        path: path.as_ref().display().to_string(),
    }
}

pub fn read_failed(path: impl AsRef<Path>, reason: impl ToString) -> MigrateError {
    MigrateError::FileReadFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

pub fn write_failed(path: impl AsRef<Path>, reason: impl ToString) -> MigrateError {
    MigrateError::FileWriteFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

pub fn dir_create_failed(path: impl AsRef<Path>, reason: impl ToString) -> MigrateError {
    MigrateError::DirCreateFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

pub fn walk_failed(path: impl AsRef<Path>, reason: impl ToString) -> MigrateError {
    MigrateError::WalkFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

