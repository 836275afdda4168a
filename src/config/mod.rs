//! Persistent configuration
//!
//! Two JSON documents live in the config directory:
//! - `user.json`: API endpoint, workspace root and token
//! - `cli.json`: per-track settings, merged on save

mod cli;
mod user;

pub use cli::CliConfig;
pub use user::UserConfig;

use crate::error::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding the config directory
pub const CONFIG_HOME_ENV: &str = "TRACKSIDE_CONFIG_HOME";

const USER_CONFIG_FILE: &str = "user.json";
const CLI_CONFIG_FILE: &str = "cli.json";

/// Loads and saves the config documents under one directory
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    /// Create a store rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a store at `$TRACKSIDE_CONFIG_HOME`, or the platform config dir
    pub fn from_env() -> Result<Self> {
        if let Some(dir) = env::var_os(CONFIG_HOME_ENV) {
            return Ok(Self::new(dir));
        }

        let dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("cannot determine config directory".to_string()))?;
        Ok(Self::new(dir.join("trackside")))
    }

    /// Config directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the user config file
    pub fn user_path(&self) -> PathBuf {
        self.dir.join(USER_CONFIG_FILE)
    }

    /// Path of the CLI config file
    pub fn cli_path(&self) -> PathBuf {
        self.dir.join(CLI_CONFIG_FILE)
    }

    /// Load the user config, or defaults if the file does not exist
    pub fn load_user(&self) -> Result<UserConfig> {
        Ok(read_document(&self.user_path())?.unwrap_or_default())
    }

    /// Replace the user config on disk
    pub fn save_user(&self, config: &UserConfig) -> Result<()> {
        write_document(&self.user_path(), config)?;
        info!("Saved user config to {}", self.user_path().display());
        Ok(())
    }

    /// Load the CLI config, or an empty one if the file does not exist
    pub fn load_cli(&self) -> Result<CliConfig> {
        Ok(read_document(&self.cli_path())?.unwrap_or_default())
    }

    /// Save the CLI config, keeping tracks that only exist on disk
    ///
    /// The file is re-read right before writing so tracks prepared since
    /// this process loaded its copy survive.
    pub fn save_cli(&self, config: &CliConfig) -> Result<()> {
        let path = self.cli_path();
        let mut merged: CliConfig = read_document(&path)?.unwrap_or_default();
        merged.merge_from(config);

        write_document(&path, &merged)?;
        info!(
            "Saved CLI config with {} track(s) to {}",
            merged.tracks.len(),
            path.display()
        );
        Ok(())
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        debug!("Config {} not found, using defaults", path.display());
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|e| Error::ConfigLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|e| Error::ConfigLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Write `value` as pretty JSON through a temp file renamed over `path`
fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let write_err = |source| Error::ConfigWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut contents = serde_json::to_vec_pretty(value)
        .map_err(|e| Error::Internal(format!("Failed to serialize config: {e}")))?;
    contents.push(b'\n');

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(write_err)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    if let Err(e) = write_private(&tmp_path, &contents).and_then(|()| fs::rename(&tmp_path, path)) {
        let _ = fs::remove_file(&tmp_path);
        return Err(write_err(e));
    }
    Ok(())
}

/// Write `contents` to a fresh file readable only by its owner
fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
    // A stale file would keep its old mode.
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => return Err(e),
        _ => {}
    }

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.sync_all()
}
