//! trackside - exercise workspace and submission client
//!
//! Library side of the `trackside` binary. The modules here hold everything
//! that does not touch the terminal:
//!
//! - [`config`]: user and CLI configuration files
//! - [`workspace`]: solution metadata, exercise lookup and file collection
//! - [`api`]: the remote service seam and its HTTP implementation
//! - [`prepare`]: merging remote track metadata into the CLI config
//! - [`submit`]: packaging a solution directory and uploading it

pub mod api;
pub mod config;
pub mod error;
pub mod prepare;
pub mod submit;
pub mod types;
pub mod workspace;
