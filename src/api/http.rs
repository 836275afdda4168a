//! HTTP implementation of the exercise service

use crate::api::ApiService;
use crate::error::{Error, Result};
use crate::types::{SubmissionFile, TrackMetadata};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

/// Multipart field name carrying solution files
pub const SUBMISSION_FIELD: &str = "files[]";

/// Exercise service over HTTP using reqwest
pub struct HttpApiService {
    client: Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Deserialize)]
struct TrackResponse {
    track: TrackMetadata,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl HttpApiService {
    /// Create a service for `base_url`, validating it
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        url::Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid API base URL {base_url}: {e}")))?;

        Ok(Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    /// Apply a per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    /// `<base>/<collection>/<id>` with `id` percent-encoded as one segment
    fn api_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{collection}/{}", self.base_url, urlencoding::encode(id))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Best-effort human readable message from an error response
async fn error_message(response: Response) -> (StatusCode, String) {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    if message.is_empty() {
        let reason = status.canonical_reason().unwrap_or("unknown status");
        (status, reason.to_string())
    } else {
        (status, message)
    }
}

#[async_trait]
impl ApiService for HttpApiService {
    async fn fetch_track(&self, track_id: &str) -> Result<TrackMetadata> {
        let url = self.api_url("tracks", track_id);
        debug!("Fetching track metadata from {url}");

        let response = self.authorize(self.client.get(&url)).send().await?;

        if !response.status().is_success() {
            let (status, message) = error_message(response).await;
            return Err(Error::Remote(format!(
                "fetching track {track_id} failed ({status}): {message}"
            )));
        }

        let body = response.text().await?;
        let parsed: TrackResponse = serde_json::from_str(&body)
            .map_err(|e| Error::Remote(format!("malformed track metadata: {e}")))?;

        Ok(parsed.track)
    }

    async fn submit_solution(&self, solution_id: &str, files: &[SubmissionFile]) -> Result<()> {
        let url = self.api_url("solution", solution_id);

        // Filenames go out verbatim; the server expects `filename="/a/b.txt"`.
        let form = files.iter().fold(Form::new().percent_encode_noop(), |form, file| {
            let part = Part::bytes(file.contents.clone()).file_name(file.upload_name());
            form.part(SUBMISSION_FIELD, part)
        });

        info!("Submitting {} file(s) to {url}", files.len());
        let response = self
            .authorize(self.client.post(&url))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let (status, message) = error_message(response).await;
            return Err(Error::SubmissionRejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}
