//! trackside - exercise workspace and submission client
//!
//! CLI binary for preparing tracks and submitting solutions.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use trackside::config::ConfigStore;

mod cli;

#[derive(Parser)]
#[command(name = "trackside")]
#[command(about = "Prepare tracks and submit exercise solutions")]
#[command(version)]
struct Cli {
    /// Show debug logging and every submitted file
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or change the user configuration
    Configure {
        /// API base URL
        #[arg(long)]
        api: Option<String>,

        /// Directory holding downloaded exercises
        #[arg(long)]
        workspace: Option<PathBuf>,

        /// API token
        #[arg(long)]
        token: Option<String>,

        /// Print the configuration after saving
        #[arg(long)]
        show: bool,
    },

    /// Fetch a track's settings and store them locally
    Prepare {
        /// Track id
        #[arg(long)]
        track: String,
    },

    /// Submit a solution
    Submit {
        /// Exercise slug or path to the solution directory
        exercise: String,

        /// Skip confirmation prompts
        #[arg(short, long)]
        yes: bool,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = ConfigStore::from_env()?;

    match cli.command {
        Commands::Configure {
            api,
            workspace,
            token,
            show,
        } => {
            let args = cli::ConfigureArgs {
                api,
                workspace,
                token,
            };
            cli::run_configure(&store, args, show)?;
        }
        Commands::Prepare { track } => {
            cli::run_prepare(&store, &track).await?;
        }
        Commands::Submit { exercise, yes } => {
            cli::run_submit(&store, &exercise, yes, cli.verbose).await?;
        }
    }

    Ok(())
}
