//! Local exercise workspace
//!
//! Finding solution directories, reading their metadata, and deciding which
//! files in them belong in a submission.

mod collect;
mod locate;
mod patterns;
mod solution;

pub use collect::collect_files;
pub use locate::locate_exercise;
pub use patterns::IgnorePatterns;
pub use solution::SOLUTION_FILE;
