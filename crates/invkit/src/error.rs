//! Error types for inventory synthesis.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while materializing an inventory tree.
#[derive(Debug, Error)]
pub enum Error {
    /// Creating the temporary inventory directory failed.
    #[error("failed to create inventory directory: {0}")]
    CreateDir(#[source] std::io::Error),

    /// Creating a `host_vars/` or `group_vars/` subdirectory failed.
    #[error("failed to create directory {path}: {source}")]
    CreateSubdir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Writing an inventory file failed.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for inventory operations.
pub type Result<T> = std::result::Result<T, Error>;
