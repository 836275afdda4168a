//! Compiled ignore patterns

use crate::error::{Error, Result};
use crate::types::DEFAULT_IGNORE_PATTERNS;
use regex::Regex;

/// Default and track-specific ignore patterns, compiled once
///
/// Patterns are unanchored regexes matched against `/`-separated paths
/// relative to the solution directory. A path is ignored if any pattern
/// matches.
#[derive(Debug, Clone)]
pub struct IgnorePatterns {
    patterns: Vec<Regex>,
}

impl IgnorePatterns {
    /// Compile the defaults followed by `extra`
    ///
    /// Entries of `extra` equal to a default are skipped, since persisted
    /// track lists already start with the defaults.
    pub fn compile<S: AsRef<str>>(extra: &[S]) -> Result<Self> {
        let is_default = |p: &str| DEFAULT_IGNORE_PATTERNS.iter().any(|d| *d == p);
        let mut sources: Vec<&str> = DEFAULT_IGNORE_PATTERNS.to_vec();
        sources.extend(extra.iter().map(AsRef::as_ref).filter(|p| !is_default(*p)));

        let patterns = sources
            .into_iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| Error::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Only the default patterns
    pub fn defaults() -> Self {
        Self::compile::<&str>(&[]).expect("default ignore patterns are valid")
    }

    /// Whether `relative_path` matches any pattern
    pub fn is_ignored(&self, relative_path: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(relative_path))
    }

    /// Number of compiled patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether no patterns are compiled
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
