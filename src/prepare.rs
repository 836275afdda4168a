//! Track preparation
//!
//! Pulls a track's metadata from the service and records it in the CLI
//! config, so later submissions know which files the track treats as tests.

use crate::api::ApiService;
use crate::config::ConfigStore;
use crate::error::Result;
use crate::types::Track;
use tracing::info;

/// Fetch `track_id` from the service and store it in the CLI config
///
/// The stored ignore patterns are the defaults followed by the track's
/// test pattern. Other tracks already in the config are left alone. A
/// failed write after a successful fetch is returned as-is; the fetch is
/// not repeated.
pub async fn prepare_track(
    store: &ConfigStore,
    api: &dyn ApiService,
    track_id: &str,
) -> Result<Track> {
    let metadata = api.fetch_track(track_id).await?;

    let mut cli = store.load_cli()?;
    let mut track = cli
        .tracks
        .get(&metadata.id)
        .cloned()
        .unwrap_or_else(|| Track::new(metadata.id.clone()));
    track.apply_metadata(&metadata);

    cli.upsert_track(track.clone());
    store.save_cli(&cli)?;

    info!(
        "Prepared track {} ({} ignore patterns)",
        track.id,
        track.ignore_patterns.len()
    );
    Ok(track)
}
