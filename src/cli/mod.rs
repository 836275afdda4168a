//! CLI commands
//!
//! Command implementations for the `trackside` binary.

mod configure;
mod prepare;
mod progress;
mod style;
mod submit;

pub use configure::{ConfigureArgs, run_configure};
pub use prepare::run_prepare;
pub use submit::run_submit;

use std::time::Duration;
use trackside::api::HttpApiService;
use trackside::config::UserConfig;
use trackside::error::Result;

/// Request timeout used by every command
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the HTTP service described by the user config
fn api_service(user: &UserConfig) -> Result<HttpApiService> {
    let token = Some(user.token.clone());
    HttpApiService::new(user.api_base_url()?, token)?.with_timeout(REQUEST_TIMEOUT)
}
