//! Test data factories for trackside types
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use trackside::types::{Solution, TrackMetadata};

/// A file to lay down in a solution directory
pub struct FixtureFile {
    pub relative_path: &'static str,
    pub contents: &'static str,
}

pub const FILE_1: FixtureFile = FixtureFile {
    relative_path: "file-1.txt",
    contents: "This is file 1.",
};

pub const FILE_2: FixtureFile = FixtureFile {
    relative_path: "subdir/file-2.txt",
    contents: "This is file 2.",
};

pub const README: FixtureFile = FixtureFile {
    relative_path: "README.md",
    contents: "The readme.",
};

/// Solution owned by the requester
pub fn make_solution(track: &str, exercise: &str) -> Solution {
    Solution {
        id: "bogus-solution-uuid".to_string(),
        track: track.to_string(),
        exercise: exercise.to_string(),
        is_requester: true,
    }
}

/// Track metadata as the service would return it
pub fn make_metadata(id: &str, test_pattern: &str) -> TrackMetadata {
    TrackMetadata {
        id: id.to_string(),
        language: format!("{id} language"),
        test_pattern: test_pattern.to_string(),
    }
}

/// Create `<root>/<track>/<exercise>` with metadata and the given files
pub fn make_solution_dir(root: &Path, solution: &Solution, files: &[FixtureFile]) -> PathBuf {
    let dir = root.join(&solution.track).join(&solution.exercise);
    fs::create_dir_all(&dir).unwrap();
    solution.write(&dir).unwrap();

    for file in files {
        let path = dir.join(file.relative_path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, file.contents).unwrap();
    }

    dir
}
