//! Error taxonomy for playbook lifecycle operations.
//!
//! Configuration and process errors surface to the caller; inventory
//! errors wrap the filesystem failures from `invkit`. Cleanup problems
//! are never errors — they are logged at the site and swallowed.

use thiserror::Error;

/// Errors returned by lifecycle operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed resource specification. No state is mutated.
    #[error("invalid playbook spec: {message}")]
    Config {
        /// What is wrong with the spec.
        message: String,
    },

    /// Inventory synthesis failed.
    #[error(transparent)]
    Inventory(#[from] invkit::Error),

    /// The external binary could not be started.
    #[error("failed to start {binary}: {source}")]
    Spawn {
        /// Binary that could not be spawned.
        binary: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The playbook run exited nonzero and failures are not ignored.
    #[error("playbook {playbook} failed: {stderr}")]
    PlaybookFailed {
        /// Playbook that failed.
        playbook: String,
        /// Process exit code, if the process exited normally.
        code: Option<i32>,
        /// Captured standard error of the failed run.
        stderr: String,
    },
}

impl Error {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result type for lifecycle operations.
pub type Result<T> = std::result::Result<T, Error>;
