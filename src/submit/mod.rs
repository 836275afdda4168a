//! Solution submission
//!
//! Handles the workflow of sending a solution directory to the service:
//! 1. Validation - confirm unexpected directories with the user
//! 2. Collection - pick files using the track's ignore patterns
//! 3. Packaging - read the files into upload parts
//! 4. Upload - post the parts and interpret the response

mod confirm;
mod execute;
mod package;
mod progress;

pub use confirm::{Confirm, FixedAnswer};
pub use execute::{submit_solution, SubmissionOutcome, SubmissionResult};
pub use package::{package_files, unexpected_state};
pub use progress::{NoopProgress, Phase, ProgressCallback};
