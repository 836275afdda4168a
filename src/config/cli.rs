//! CLI config: per-track settings

use crate::error::Result;
use crate::types::Track;
use crate::workspace::IgnorePatterns;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Track settings keyed by track id
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CliConfig {
    /// Known tracks
    pub tracks: BTreeMap<String, Track>,
}

impl CliConfig {
    /// Insert or replace a track entry
    pub fn upsert_track(&mut self, track: Track) {
        self.tracks.insert(track.id.clone(), track);
    }

    /// Compiled ignore patterns for a track, defaults only if unknown
    pub fn ignore_patterns_for(&self, track_id: &str) -> Result<IgnorePatterns> {
        match self.tracks.get(track_id) {
            Some(track) => IgnorePatterns::compile(&track.ignore_patterns),
            None => {
                warn!("Track {track_id} not prepared, using default ignore patterns");
                Ok(IgnorePatterns::defaults())
            }
        }
    }

    /// Overlay `other` onto this config; entries from `other` win
    pub(crate) fn merge_from(&mut self, other: &Self) {
        for (id, track) in &other.tracks {
            self.tracks.insert(id.clone(), track.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_existing_and_overrides_shared() {
        let mut on_disk = CliConfig::default();
        on_disk.upsert_track(Track::new("a"));
        let mut old_b = Track::new("b");
        old_b.language = "old".to_string();
        on_disk.upsert_track(old_b);

        let mut in_memory = CliConfig::default();
        let mut new_b = Track::new("b");
        new_b.language = "new".to_string();
        in_memory.upsert_track(new_b);

        on_disk.merge_from(&in_memory);
        assert_eq!(on_disk.tracks.len(), 2);
        assert_eq!(on_disk.tracks["b"].language, "new");
    }

    #[test]
    fn test_unknown_track_falls_back_to_defaults() {
        let patterns = CliConfig::default().ignore_patterns_for("nope").unwrap();
        assert!(patterns.is_ignored("README.md"));
        assert!(!patterns.is_ignored("lib.rs"));
    }

    #[test]
    fn test_known_track_uses_its_patterns() {
        let mut cli = CliConfig::default();
        let mut track = Track::new("rust");
        track.ignore_patterns.push("_test[.]rs$".to_string());
        cli.upsert_track(track);

        let patterns = cli.ignore_patterns_for("rust").unwrap();
        assert!(patterns.is_ignored("tests/foo_test.rs"));
    }

    #[test]
    fn test_tracks_serialize_under_tracks_key() {
        let mut cli = CliConfig::default();
        cli.upsert_track(Track::new("go"));
        let json = serde_json::to_value(&cli).unwrap();
        assert_eq!(json["tracks"]["go"]["ignorePatterns"][0], ".*[.]md");
    }
}
