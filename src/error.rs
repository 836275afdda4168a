//! Error types for trackside

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the trackside library
#[derive(Debug, Error)]
pub enum Error {
    /// A config file exists but could not be read or parsed
    #[error("failed to load config {}: {message}", .path.display())]
    ConfigLoad {
        /// Config file path
        path: PathBuf,
        /// What went wrong
        message: String,
    },

    /// A config file could not be persisted
    #[error("failed to write config {}: {source}", .path.display())]
    ConfigWrite {
        /// Config file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A configuration value is missing or invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// Solution metadata, exercise or track not found
    #[error("not found: {0}")]
    NotFound(String),

    /// A file or directory could not be read
    #[error("cannot read {}: {source}", .path.display())]
    Filesystem {
        /// Offending path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// An ignore pattern failed to compile
    #[error("invalid ignore pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern as written in config
        pattern: String,
        /// Regex compile error
        #[source]
        source: regex::Error,
    },

    /// The remote service returned something unexpected
    #[error("unexpected response from server: {0}")]
    Remote(String),

    /// Transport-level failure talking to the remote service
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server refused the submission
    #[error("submission rejected ({status}): {message}")]
    SubmissionRejected {
        /// HTTP status code
        status: u16,
        /// Message reported by the server
        message: String,
    },

    /// The user declined to continue
    #[error("cancelled")]
    Cancelled,

    /// Internal invariant violation
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for trackside operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a [`Error::Filesystem`] from a path and IO error
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}
