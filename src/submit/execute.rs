//! Submission execution
//!
//! Runs a solution directory through collect, package and upload:
//! `Located → Collected → Packaged → Sent → Accepted | Rejected | TransportFailed`.
//! Nothing here retries; a failure is returned to the caller as-is.

use crate::api::ApiService;
use crate::config::CliConfig;
use crate::error::{Error, Result};
use crate::submit::package::{package_files, unexpected_state};
use crate::submit::{Confirm, Phase, ProgressCallback};
use crate::types::Solution;
use crate::workspace::collect_files;
use std::path::Path;
use tracing::{info, warn};

/// How a submission ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The server accepted the upload
    Accepted,
    /// Every file was ignored, so nothing was uploaded
    NothingToSubmit,
}

/// Result of a submission
#[derive(Debug, Clone)]
pub struct SubmissionResult {
    /// Solution the files were submitted to
    pub solution_id: String,
    /// Relative paths of the uploaded files
    pub files: Vec<String>,
    /// How the submission ended
    pub outcome: SubmissionOutcome,
}

impl SubmissionResult {
    /// Number of files the server received
    pub fn submitted_count(&self) -> usize {
        match self.outcome {
            SubmissionOutcome::Accepted => self.files.len(),
            SubmissionOutcome::NothingToSubmit => 0,
        }
    }
}

/// Submit the solution in `dir`
///
/// Ignore patterns come from the solution's track in `cli`, or the defaults
/// if the track was never prepared. When the directory looks unexpected
/// (someone else's solution, or renamed) `confirm` is asked first and a
/// refusal sends nothing.
pub async fn submit_solution(
    dir: &Path,
    solution: &Solution,
    cli: &CliConfig,
    api: &dyn ApiService,
    confirm: &dyn Confirm,
    progress: &dyn ProgressCallback,
) -> Result<SubmissionResult> {
    progress.on_phase(Phase::Located).await;

    let concerns = unexpected_state(dir, solution);
    if !concerns.is_empty() {
        let prompt = format!("{} Submit anyway?", concerns.join(" "));
        if !confirm.confirm(&prompt)? {
            return Err(Error::Cancelled);
        }
    }

    let patterns = cli.ignore_patterns_for(&solution.track)?;
    let relative_paths = collect_files(dir, &patterns)?;
    progress.on_phase(Phase::Collected).await;

    if relative_paths.is_empty() {
        warn!("No files to submit in {}", dir.display());
        progress
            .on_message(&format!("No files to submit in {}", dir.display()))
            .await;
        return Ok(SubmissionResult {
            solution_id: solution.id.clone(),
            files: Vec::new(),
            outcome: SubmissionOutcome::NothingToSubmit,
        });
    }

    let files = package_files(dir, &relative_paths)?;
    for file in &files {
        progress.on_file_packaged(&file.relative_path).await;
    }
    progress.on_phase(Phase::Packaged).await;

    progress.on_phase(Phase::Sent).await;
    if let Err(e) = api.submit_solution(&solution.id, &files).await {
        let phase = match e {
            Error::SubmissionRejected { .. } => Phase::Rejected,
            _ => Phase::TransportFailed,
        };
        progress.on_phase(phase).await;
        return Err(e);
    }

    info!(
        "Submitted {} file(s) for {}/{}",
        files.len(),
        solution.track,
        solution.exercise
    );
    progress.on_phase(Phase::Complete).await;

    Ok(SubmissionResult {
        solution_id: solution.id.clone(),
        files: relative_paths,
        outcome: SubmissionOutcome::Accepted,
    })
}
