//! Progress callback trait for interface-agnostic updates
//!
//! Lets the CLI (or a test) observe a submission as it moves through its
//! phases without the pipeline knowing how output is rendered.

use async_trait::async_trait;
use std::fmt;

/// Submission phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Solution directory and metadata resolved
    Located,
    /// Files selected from the directory
    Collected,
    /// File contents read into upload parts
    Packaged,
    /// Upload sent to the server
    Sent,
    /// Server accepted the submission
    Complete,
    /// Server answered with a non-success status
    Rejected,
    /// The upload never got an answer
    TransportFailed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Located => "Locating solution",
            Self::Collected => "Collecting files",
            Self::Packaged => "Packaging files",
            Self::Sent => "Uploading",
            Self::Complete => "Done",
            Self::Rejected => "Rejected",
            Self::TransportFailed => "Upload failed",
        };
        f.write_str(label)
    }
}

/// Progress callback trait
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called for each file read into the upload
    async fn on_file_packaged(&self, relative_path: &str);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_file_packaged(&self, _relative_path: &str) {}
    async fn on_message(&self, _message: &str) {}
}
