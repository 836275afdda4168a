//! Packaging collected files for upload

use crate::error::{Error, Result};
use crate::types::{Solution, SubmissionFile};
use std::fs;
use std::path::Path;

/// Read each collected file under `dir` into an upload part
///
/// Files are read fully one at a time. The first unreadable file aborts
/// packaging so a partial set is never sent.
pub fn package_files(dir: &Path, relative_paths: &[String]) -> Result<Vec<SubmissionFile>> {
    relative_paths
        .iter()
        .map(|relative| {
            let path = dir.join(relative);
            let contents = fs::read(&path).map_err(|e| Error::filesystem(&path, e))?;
            Ok(SubmissionFile {
                relative_path: relative.clone(),
                contents,
            })
        })
        .collect()
}

/// Reasons a submission from `dir` needs the user's go-ahead
pub fn unexpected_state(dir: &Path, solution: &Solution) -> Vec<String> {
    let mut concerns = Vec::new();

    if !solution.is_requester {
        concerns.push(format!(
            "Solution {} for {} belongs to another user.",
            solution.id, solution.exercise
        ));
    }

    let dir_name = dir
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()));
    if let Some(name) = dir_name {
        if name != solution.exercise {
            concerns.push(format!(
                "Directory {name} does not match exercise {}.",
                solution.exercise
            ));
        }
    }

    concerns
}
