//! CLI progress callback for submissions

use crate::cli::style::{Stylize, arrow, check};
use anstream::println;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use trackside::submit::{Phase, ProgressCallback};

/// Prints submission phases and keeps count of packaged files
///
/// The count is reported when a submission fails after packaging.
pub struct CliProgress {
    verbose: bool,
    packaged: AtomicUsize,
}

impl CliProgress {
    /// Progress that prints each packaged file when `verbose`
    pub const fn new(verbose: bool) -> Self {
        Self {
            verbose,
            packaged: AtomicUsize::new(0),
        }
    }

    /// Files read into the upload so far
    pub fn packaged(&self) -> usize {
        self.packaged.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Complete => println!("{} {}", check(), phase.success()),
            // Failures are reported by the caller along with the error
            Phase::Packaged | Phase::Rejected | Phase::TransportFailed => {}
            _ => println!("{}...", phase.to_string().emphasis()),
        }
    }

    async fn on_file_packaged(&self, relative_path: &str) {
        self.packaged.fetch_add(1, Ordering::SeqCst);
        if self.verbose {
            println!("  {} {}", arrow(), relative_path.accent());
        }
    }

    async fn on_message(&self, message: &str) {
        println!("{}", message.muted());
    }
}
