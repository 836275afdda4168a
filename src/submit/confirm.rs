//! Confirmation capability

use crate::error::Result;

/// Asks the user whether to go ahead
///
/// Injected into the pipeline so it never reads the terminal itself.
pub trait Confirm: Send + Sync {
    /// Return `true` to continue
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Answers every prompt with a fixed response
pub struct FixedAnswer(
    /// Answer returned for every prompt
    pub bool,
);

impl Confirm for FixedAnswer {
    fn confirm(&self, _prompt: &str) -> Result<bool> {
        Ok(self.0)
    }
}
