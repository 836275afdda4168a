//! Configure command - edit the user config

use crate::cli::style::{Stylize, check};
use anstream::println;
use std::path::PathBuf;
use trackside::config::ConfigStore;
use trackside::error::{Error, Result};

/// Values to change; `None` leaves the stored value alone
#[derive(Debug, Default)]
pub struct ConfigureArgs {
    /// New API base URL
    pub api: Option<String>,
    /// New workspace directory
    pub workspace: Option<PathBuf>,
    /// New API token
    pub token: Option<String>,
}

/// Run the configure command
pub fn run_configure(store: &ConfigStore, args: ConfigureArgs, show: bool) -> Result<()> {
    let mut user = store.load_user()?;
    let changed = args.api.is_some() || args.workspace.is_some() || args.token.is_some();

    if let Some(api) = args.api {
        url::Url::parse(&api)
            .map_err(|e| Error::Config(format!("invalid API base URL {api}: {e}")))?;
        user.api_base_url = api.trim_end_matches('/').to_string();
    }

    if let Some(workspace) = args.workspace {
        user.workspace = std::path::absolute(&workspace)
            .map_err(|e| Error::filesystem(&workspace, e))?;
    }

    if let Some(token) = args.token {
        user.token = token;
    }

    if changed {
        store.save_user(&user)?;
        println!(
            "{} Saved {}",
            check(),
            store.user_path().display().to_string().accent()
        );
    }

    if show || !changed {
        let api = if user.api_base_url.is_empty() {
            "(not set)".to_string()
        } else {
            user.api_base_url.clone()
        };
        let token = if user.token.is_empty() { "(not set)" } else { "(set)" };

        println!("Config dir: {}", store.dir().display().to_string().muted());
        println!("API:        {}", api.accent());
        println!("Workspace:  {}", user.resolved_workspace()?.display());
        println!("Token:      {token}");
    }

    Ok(())
}
