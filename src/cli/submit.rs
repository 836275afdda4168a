//! Submit command - upload a solution directory

use crate::cli::api_service;
use crate::cli::progress::CliProgress;
use crate::cli::style::{Stylize, check, cross};
use anstream::{eprintln, println};
use dialoguer::Select;
use std::path::{Path, PathBuf};
use trackside::config::ConfigStore;
use trackside::error::{Error, Result};
use trackside::submit::{Confirm, FixedAnswer, SubmissionOutcome, submit_solution};
use trackside::types::Solution;
use trackside::workspace::locate_exercise;

/// Confirmation read from the terminal
struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(true)
            .interact()
            .map_err(|e| Error::Internal(format!("confirmation prompt failed: {e}")))
    }
}

/// Pick one directory when an exercise exists in several tracks
fn choose_directory(mut candidates: Vec<PathBuf>, yes: bool) -> Result<PathBuf> {
    if candidates.len() == 1 || yes {
        return Ok(candidates.swap_remove(0));
    }

    let items: Vec<String> = candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    let selection = Select::new()
        .with_prompt("Which exercise do you want to submit?")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| Error::Internal(format!("selection prompt failed: {e}")))?;

    Ok(candidates.swap_remove(selection))
}

/// Run the submit command
pub async fn run_submit(store: &ConfigStore, exercise: &str, yes: bool, verbose: bool) -> Result<()> {
    let user = store.load_user()?;
    let workspace = user.resolved_workspace()?;

    let dir = choose_directory(locate_exercise(&workspace, exercise)?, yes)?;
    let solution = Solution::read(&dir)?;
    let cli = store.load_cli()?;
    let api = api_service(&user)?;

    println!(
        "Submitting {}/{} from {}",
        solution.track.accent(),
        solution.exercise.accent(),
        display_dir(&dir).muted()
    );

    let progress = CliProgress::new(verbose);
    let confirm: Box<dyn Confirm> = if yes {
        Box::new(FixedAnswer(true))
    } else {
        Box::new(TerminalConfirm)
    };

    let result = match submit_solution(&dir, &solution, &cli, &api, confirm.as_ref(), &progress)
        .await
    {
        Ok(result) => result,
        Err(e) => {
            eprintln!(
                "{} Submission failed after preparing {} file(s)",
                cross(),
                progress.packaged()
            );
            return Err(e);
        }
    };

    match result.outcome {
        SubmissionOutcome::Accepted => {
            let count = result.submitted_count();
            println!(
                "{} Submitted {} file{}",
                check(),
                count.accent(),
                if count == 1 { "" } else { "s" }
            );
        }
        SubmissionOutcome::NothingToSubmit => {
            eprintln!(
                "{}",
                "Nothing to submit: every file matched an ignore pattern".warn()
            );
        }
    }

    Ok(())
}

fn display_dir(dir: &Path) -> String {
    dir.canonicalize()
        .unwrap_or_else(|_| dir.to_path_buf())
        .display()
        .to_string()
}
