//! Error types for the release packaging pipeline.
//!
//! Each variant names the stage and input that caused the failure so a CI
//! job log points straight at the misconfiguration. All errors are terminal
//! for the current run; the surrounding job infrastructure owns retries.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur during a packaging run.
#[derive(Debug, Error)]
pub enum PackageError {
    /// Neither a release tag nor a usable branch/commit pair was supplied.
    #[error("invalid build identity: {reason}")]
    InvalidIdentity {
        /// Description of what was missing or malformed.
        reason: String,
    },

    /// The derived version string cannot be used in a file name.
    #[error("unsafe version string {value:?}: {reason}")]
    UnsafeVersionString {
        /// The offending derived value.
        value: String,
        /// Which safety rule the value violated.
        reason: String,
    },

    /// A build metadata field is empty or unsafe for use in a file name.
    #[error("invalid build metadata: {field} {reason}")]
    InvalidMetadata {
        /// Name of the offending field.
        field: &'static str,
        /// Which validation rule the value violated.
        reason: String,
    },

    /// The binary or asset directory to package does not exist.
    #[error("source not found: {path}")]
    SourceNotFound {
        /// Path that was expected to exist.
        path: Utf8PathBuf,
    },

    /// The staging directory could not be created or populated.
    #[error("staging failed: {reason}")]
    StagingFailure {
        /// Description of the staging failure.
        reason: String,
    },

    /// The distribution directory cannot be created or written to.
    #[error("distribution directory {path} is not writable: {reason}")]
    DestinationUnwritable {
        /// Path to the non-writable directory.
        path: Utf8PathBuf,
        /// Description of the underlying I/O error.
        reason: String,
    },

    /// A file already occupies the final archive path.
    #[error(
        "archive name collision at {path}: distinct target/job combinations must produce distinct names"
    )]
    ArchiveNameCollision {
        /// The occupied destination path.
        path: Utf8PathBuf,
    },

    /// An I/O operation failed outside the cases above.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`PackageError`].
pub type Result<T> = std::result::Result<T, PackageError>;
