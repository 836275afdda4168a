//! Solution file collection

use crate::error::{Error, Result};
use crate::workspace::{IgnorePatterns, SOLUTION_FILE};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Collect the files under `dir` that belong in a submission
///
/// Returns `/`-separated paths relative to `dir`, sorted. Directories,
/// symlinks and the solution metadata file are never returned, and any
/// path matching `patterns` is dropped.
pub fn collect_files(dir: &Path, patterns: &IgnorePatterns) -> Result<Vec<String>> {
    let mut files = Vec::new();
    walk(dir, "", patterns, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk(dir: &Path, prefix: &str, patterns: &IgnorePatterns, out: &mut Vec<String>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| Error::filesystem(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| Error::filesystem(dir, e))?;
        let path = entry.path();
        // file_type() does not follow symlinks
        let file_type = entry.file_type().map_err(|e| Error::filesystem(&path, e))?;

        let raw_name = entry.file_name();
        let name = raw_name.to_string_lossy();
        let relative = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}/{name}")
        };

        if file_type.is_symlink() {
            debug!("Skipping symlink {relative}");
        } else if !file_type.is_dir() && !file_type.is_file() {
            debug!("Skipping special file {relative}");
        } else if file_type.is_file() && name == SOLUTION_FILE {
            debug!("Skipping solution metadata {relative}");
        } else if file_type.is_file() && patterns.is_ignored(&relative) {
            debug!("Ignoring {relative}");
        } else if raw_name.to_str().is_none() {
            // Only names that would be uploaded or descended into must be UTF-8.
            return Err(Error::filesystem(
                &path,
                io::Error::new(io::ErrorKind::InvalidData, "file name is not valid UTF-8"),
            ));
        } else if file_type.is_dir() {
            walk(&path, &relative, patterns, out)?;
        } else {
            out.push(relative);
        }
    }

    Ok(())
}
