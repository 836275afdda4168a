//! Exercise directory lookup

use crate::error::{Error, Result};
use crate::workspace::SOLUTION_FILE;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve an exercise argument to candidate solution directories
///
/// An existing directory path is returned as-is. Otherwise `exercise` is
/// treated as a slug and looked up as `<workspace>/<track>/<exercise>`
/// across all tracks; only directories holding solution metadata count.
pub fn locate_exercise(workspace: &Path, exercise: &str) -> Result<Vec<PathBuf>> {
    let as_path = Path::new(exercise);
    if as_path.is_dir() {
        return Ok(vec![as_path.to_path_buf()]);
    }

    let tracks = fs::read_dir(workspace).map_err(|e| Error::filesystem(workspace, e))?;

    let mut candidates = Vec::new();
    for track in tracks {
        let track = track.map_err(|e| Error::filesystem(workspace, e))?;
        let candidate = track.path().join(exercise);
        if candidate.join(SOLUTION_FILE).is_file() {
            debug!("Found exercise candidate {}", candidate.display());
            candidates.push(candidate);
        }
    }

    if candidates.is_empty() {
        return Err(Error::NotFound(format!(
            "exercise {exercise} in workspace {}",
            workspace.display()
        )));
    }

    candidates.sort();
    Ok(candidates)
}
