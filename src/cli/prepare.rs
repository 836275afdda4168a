//! Prepare command - record a track's settings locally

use crate::cli::api_service;
use crate::cli::style::{Stylize, check, spinner_style};
use anstream::println;
use indicatif::ProgressBar;
use std::time::Duration;
use trackside::config::ConfigStore;
use trackside::error::Result;
use trackside::prepare::prepare_track;

/// Run the prepare command
pub async fn run_prepare(store: &ConfigStore, track_id: &str) -> Result<()> {
    let user = store.load_user()?;
    let api = api_service(&user)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!("Fetching track {track_id}..."));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = prepare_track(store, &api, track_id).await;
    spinner.finish_and_clear();
    let track = result?;

    println!(
        "{} Prepared {} ({})",
        check(),
        track.id.accent(),
        track.language
    );
    println!("Ignored in submissions:");
    for pattern in &track.ignore_patterns {
        println!("  {}", pattern.muted());
    }

    Ok(())
}
