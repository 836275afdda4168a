//! Solution metadata file

use crate::error::{Error, Result};
use crate::types::Solution;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Name of the metadata file inside every solution directory
pub const SOLUTION_FILE: &str = ".solution.json";

impl Solution {
    /// Write the metadata file into `dir`
    pub fn write(&self, dir: &Path) -> Result<()> {
        let path = dir.join(SOLUTION_FILE);
        let mut contents = serde_json::to_vec_pretty(self)
            .map_err(|e| Error::Internal(format!("Failed to serialize solution: {e}")))?;
        contents.push(b'\n');

        fs::write(&path, contents).map_err(|e| Error::filesystem(&path, e))?;
        debug!("Wrote solution {} to {}", self.id, path.display());
        Ok(())
    }

    /// Read the metadata file from `dir`
    ///
    /// A missing or unparseable file means `dir` is not a solution directory.
    pub fn read(dir: &Path) -> Result<Self> {
        let path = dir.join(SOLUTION_FILE);
        let contents = fs::read_to_string(&path).map_err(|e| {
            Error::NotFound(format!("no solution metadata in {}: {e}", dir.display()))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            Error::NotFound(format!("invalid solution metadata in {}: {e}", dir.display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Solution {
        Solution {
            id: "bogus-solution-uuid".to_string(),
            track: "bogus-track".to_string(),
            exercise: "bogus-exercise".to_string(),
            is_requester: true,
        }
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        sample().write(dir.path()).unwrap();
        assert_eq!(Solution::read(dir.path()).unwrap(), sample());
    }

    #[test]
    fn test_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = Solution::read(dir.path()).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_malformed_is_not_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SOLUTION_FILE), r#"{"id": 7}"#).unwrap();
        let err = Solution::read(dir.path()).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
