//! Core types for trackside

use serde::{Deserialize, Serialize};

/// Ignore patterns applied to every track, ahead of track-specific ones
pub const DEFAULT_IGNORE_PATTERNS: [&str; 2] = [".*[.]md", "[.]solution[.]json"];

/// Per-track settings stored in the CLI config
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Track slug, also the key in the CLI config
    pub id: String,
    /// Human readable language name
    #[serde(default)]
    pub language: String,
    /// Pattern identifying the track's test files
    #[serde(default)]
    pub test_pattern: String,
    /// Patterns excluded from submissions, defaults first
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

impl Track {
    /// Create a track carrying only the default ignore patterns
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            language: String::new(),
            test_pattern: String::new(),
            ignore_patterns: default_ignore_patterns(),
        }
    }

    /// Apply remote metadata, rebuilding the ignore list from the defaults
    pub fn apply_metadata(&mut self, metadata: &TrackMetadata) {
        self.id.clone_from(&metadata.id);
        self.language.clone_from(&metadata.language);
        self.test_pattern.clone_from(&metadata.test_pattern);

        let mut patterns = default_ignore_patterns();
        if !metadata.test_pattern.is_empty() {
            patterns.push(metadata.test_pattern.clone());
        }
        self.ignore_patterns = patterns;
    }
}

/// The default ignore patterns as owned strings
pub fn default_ignore_patterns() -> Vec<String> {
    DEFAULT_IGNORE_PATTERNS.iter().map(ToString::to_string).collect()
}

/// Track metadata as served by the remote API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackMetadata {
    /// Track slug
    pub id: String,
    /// Language name
    pub language: String,
    /// Test file pattern
    #[serde(default)]
    pub test_pattern: String,
}

/// A user's attempt at one exercise, recorded next to the exercise files
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// Server-assigned solution id
    pub id: String,
    /// Track slug
    pub track: String,
    /// Exercise slug
    pub exercise: String,
    /// Whether the current user owns this solution
    pub is_requester: bool,
}

/// One file in a submission upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFile {
    /// Path relative to the solution directory, `/`-separated
    pub relative_path: String,
    /// Raw file contents
    pub contents: Vec<u8>,
}

impl SubmissionFile {
    /// Filename sent on the wire: the relative path with a leading `/`
    pub fn upload_name(&self) -> String {
        format!("/{}", self.relative_path)
    }
}
