//! Mock exercise service for testing
//!
//! Hand-written rather than generated, so calls can be inspected after the
//! fact and failures injected per operation.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use trackside::api::ApiService;
use trackside::error::{Error, Result};
use trackside::types::{SubmissionFile, TrackMetadata};

/// Call record for `submit_solution`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitCall {
    pub solution_id: String,
    pub files: Vec<SubmissionFile>,
}

/// In-memory exercise service
#[derive(Default)]
pub struct MockApiService {
    tracks: Mutex<HashMap<String, TrackMetadata>>,
    fetch_calls: Mutex<Vec<String>>,
    submit_calls: Mutex<Vec<SubmitCall>>,
    reject_submission: Mutex<Option<(u16, String)>>,
}

impl MockApiService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `metadata` for its track id
    pub fn add_track(&self, metadata: TrackMetadata) {
        self.tracks
            .lock()
            .unwrap()
            .insert(metadata.id.clone(), metadata);
    }

    /// Make `submit_solution` fail as a server rejection
    pub fn reject_submissions(&self, status: u16, message: &str) {
        *self.reject_submission.lock().unwrap() = Some((status, message.to_string()));
    }

    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.lock().unwrap().clone()
    }

    pub fn submit_calls(&self) -> Vec<SubmitCall> {
        self.submit_calls.lock().unwrap().clone()
    }

    /// Upload names and contents of the only submission made
    pub fn submitted_files(&self) -> HashMap<String, String> {
        let calls = self.submit_calls();
        assert_eq!(calls.len(), 1, "expected exactly one submission: {calls:?}");
        calls[0]
            .files
            .iter()
            .map(|f| {
                (
                    f.upload_name(),
                    String::from_utf8(f.contents.clone()).unwrap(),
                )
            })
            .collect()
    }
}

#[async_trait]
impl ApiService for MockApiService {
    async fn fetch_track(&self, track_id: &str) -> Result<TrackMetadata> {
        self.fetch_calls.lock().unwrap().push(track_id.to_string());
        self.tracks
            .lock()
            .unwrap()
            .get(track_id)
            .cloned()
            .ok_or_else(|| Error::Remote(format!("fetching track {track_id} failed (404)")))
    }

    async fn submit_solution(&self, solution_id: &str, files: &[SubmissionFile]) -> Result<()> {
        self.submit_calls.lock().unwrap().push(SubmitCall {
            solution_id: solution_id.to_string(),
            files: files.to_vec(),
        });

        if let Some((status, message)) = self.reject_submission.lock().unwrap().clone() {
            return Err(Error::SubmissionRejected { status, message });
        }
        Ok(())
    }
}
