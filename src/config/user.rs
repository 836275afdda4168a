//! User config: where the API lives and where exercises are kept

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Per-machine user settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserConfig {
    /// Base URL of the remote API, without trailing slash
    pub api_base_url: String,
    /// Root directory holding track directories
    pub workspace: PathBuf,
    /// API token, sent as a bearer token when set
    pub token: String,
}

impl UserConfig {
    /// The configured API base URL
    pub fn api_base_url(&self) -> Result<&str> {
        let url = self.api_base_url.trim_end_matches('/');
        if url.is_empty() {
            return Err(Error::Config(
                "no API base URL configured; run `trackside configure --api <url>`".to_string(),
            ));
        }
        Ok(url)
    }

    /// The configured workspace, or `~/trackside` when unset
    pub fn resolved_workspace(&self) -> Result<PathBuf> {
        if !self.workspace.as_os_str().is_empty() {
            return Ok(self.workspace.clone());
        }

        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("cannot determine home directory".to_string()))?;
        let workspace = home.join("trackside");
        warn!("No workspace configured, using {}", workspace.display());
        Ok(workspace)
    }
}
