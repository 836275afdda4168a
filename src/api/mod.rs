//! Remote exercise service
//!
//! [`ApiService`] is the seam between the workflows and the network;
//! [`HttpApiService`] is the real implementation.

mod http;

pub use http::{HttpApiService, SUBMISSION_FIELD};

use crate::error::Result;
use crate::types::{SubmissionFile, TrackMetadata};
use async_trait::async_trait;

/// Operations the remote service offers
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Fetch metadata for a track
    async fn fetch_track(&self, track_id: &str) -> Result<TrackMetadata>;

    /// Upload the files of a solution
    async fn submit_solution(&self, solution_id: &str, files: &[SubmissionFile]) -> Result<()>;
}
